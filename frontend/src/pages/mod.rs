pub mod employees;
pub mod roster;

pub use employees::EmployeesPage;
pub use roster::RosterPage;
