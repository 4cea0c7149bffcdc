mod common;
mod staffing;
