mod errors;
mod logging;
mod query;
mod report;
mod support;
