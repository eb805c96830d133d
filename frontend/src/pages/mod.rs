pub mod report;
pub mod tutor;
pub mod virtual_patient;
