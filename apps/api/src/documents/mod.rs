// CV document management.
// CRUD over cv_documents plus the generate endpoint that feeds the pdf core.

pub mod handlers;
pub mod store;
