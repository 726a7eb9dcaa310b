/// Where controllers report outcomes. The view layer adapts this onto the
/// toast stack; tests use a recording sink.
pub trait NotificationSink {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}
