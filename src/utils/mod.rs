mod date;

pub use date::{month_end, month_name, parse_purchase_date, year_month};
