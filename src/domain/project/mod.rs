//! Project domain - portfolio entries shown on the public site

mod entity;
mod filter;
mod validation;

pub use entity::{Category, Project, ProjectId};
pub use filter::{listing_order, ProjectFilter};
pub use validation::{
    missing_required_fields, parse_category, parse_completion_date, parse_featured,
    parse_optional_url, parse_technologies, parse_text, validate_project_id,
    ProjectValidationError, REQUIRED_FIELDS,
};
