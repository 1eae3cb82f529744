pub mod colorize;
