use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, fun_fact::entities::FunFact};

#[cfg_attr(test, mockall::automock)]
pub trait FunFactService: Send + Sync {
    fn fun_fact(&self) -> impl Future<Output = Result<FunFact, CoreError>> + Send;
}
