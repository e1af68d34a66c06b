use crate::error::ContFracError;

pub type CfResult<T> = Result<T, ContFracError>;
