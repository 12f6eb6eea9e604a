pub mod ports;
pub mod scan_interest;
pub mod scan_interest_rayon;
