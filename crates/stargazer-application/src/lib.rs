pub mod advisory_service;
pub mod form_controller;
pub mod notice;

pub use advisory_service::{AdvisoryClient, AdvisoryOutcome};
pub use form_controller::{AskOutcome, FormController, SubmitOutcome};
pub use notice::{Notice, NoticeLevel};
