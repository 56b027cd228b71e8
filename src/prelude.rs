#[doc(no_inline)]
pub use crate::{
    error::ListError,
    list::{Iter, LinkedList},
    userdata::{InnerResult, UserData, UserDataMethods, UserDataTypedMap},
    value::{Value, ValueType},
};
