use askama::Template;

use crate::metadata::Reading;

#[derive(Template)]
#[template(path = "report.html")]
pub struct ReportTemplate {
    pub readings: Vec<Reading>,
    pub version: String,
}
