mod blocking_queue;

pub use self::blocking_queue::*;
