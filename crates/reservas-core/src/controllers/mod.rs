//! Controllers for the two screens: the reservation form and the list.

mod form;
mod list;

pub use form::{FormController, FormInput, HOURS_RANGE};
pub use list::{
    render_report, DeleteOutcome, ListController, DELETE_PROMPT_HEADER, DELETE_PROMPT_LABEL,
    DELETE_PROMPT_TITLE, EMPTY_REPORT, REPORT_SEPARATOR,
};
