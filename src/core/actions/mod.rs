pub mod pick_julia_c;
pub mod scan_interest;
