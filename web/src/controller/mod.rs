pub(crate) mod echo_controller;
pub(crate) mod health_check_controller;
pub(crate) mod leaderboard_controller;
pub(crate) mod session_controller;
