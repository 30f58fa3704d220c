/// Request abstraction consumed by the match walk. Only the path is needed;
/// host or method dispatch is done by keeping separate tables per key.
pub trait RequestPath {
    fn request_path(&self) -> &str;
}

impl RequestPath for str {
    fn request_path(&self) -> &str {
        self
    }
}

impl RequestPath for String {
    fn request_path(&self) -> &str {
        self.as_str()
    }
}

impl<R: RequestPath + ?Sized> RequestPath for &R {
    fn request_path(&self) -> &str {
        (**self).request_path()
    }
}
