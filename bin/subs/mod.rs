macro_rules! pb_create {
    () => {
        use indicatif::ProgressBar;
        use lazy_static::lazy_static;
        use std::sync::Mutex;

        lazy_static! {
            static ref PB: Mutex<ProgressBar> = Mutex::new(ProgressBar::new(0));
        }
    };
}

macro_rules! pb_create_spinner {
    () => {
        use indicatif::ProgressBar;
        use lazy_static::lazy_static;
        use std::sync::Mutex;

        lazy_static! {
            static ref PB: Mutex<ProgressBar> = Mutex::new(ProgressBar::new_spinner());
        }
    };
}

macro_rules! pb_set_print {
    () => {
        PB.lock()
            .unwrap()
            .enable_steady_tick(std::time::Duration::from_millis(120));
    };
}

macro_rules! pb_set_length {
    ($length:expr) => {
        PB.lock().unwrap().set_length($length as u64);
    };
}

macro_rules! pb_inc {
    () => {
        PB.lock().unwrap().inc(1);
    };
}

macro_rules! pb_done {
    () => {
        PB.lock().unwrap().finish_and_clear();
    };
}

pub mod pattern;
pub mod run;
pub mod runnable;
pub mod scan;
