pub mod acknowledgement;
pub mod email;
pub mod field;
pub mod message;
pub mod name;
pub mod receipt;
pub mod submission;
