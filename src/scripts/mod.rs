pub mod arabic;
