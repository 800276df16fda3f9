use std::io;

const ERROR_NOT_SAME_DEVICE: i32 = 17;

pub fn is_not_same_device(err: &io::Error) -> bool {
    err.raw_os_error() == Some(ERROR_NOT_SAME_DEVICE)
}
