pub(crate) mod user_document;
