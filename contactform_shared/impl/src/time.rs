use chrono::{DateTime, Utc};
use contactform_di::Build;
use contactform_shared_contracts::time::TimeService;
use contactform_utils::trace_instrument;

#[derive(Debug, Clone, Copy, Build)]
pub struct TimeServiceImpl;

impl TimeService for TimeServiceImpl {
    #[trace_instrument(skip(self))]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
