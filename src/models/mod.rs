mod employee;

pub use employee::{Employee, EmployeeChanges, NewEmployee};
