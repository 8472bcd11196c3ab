pub(crate) mod json_payload;
