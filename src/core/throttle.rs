/// Leading-edge throttle with a trailing call.
///
/// The first offer fires at once. Offers inside the interval are held (only
/// the latest is kept) and fire from [`poll`](Throttle::poll) once the
/// interval has passed.
#[derive(Clone, Debug)]
pub struct Throttle<T> {
    interval_ms: f64,
    last_fire_ms: Option<f64>,
    pending: Option<T>,
}

impl<T> Throttle<T> {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_fire_ms: None,
            pending: None,
        }
    }

    /// Returns the value back if it may fire now; otherwise keeps it pending.
    pub fn offer(&mut self, now_ms: f64, value: T) -> Option<T> {
        if self.is_open(now_ms) {
            self.last_fire_ms = Some(now_ms);
            self.pending = None;
            Some(value)
        } else {
            self.pending = Some(value);
            None
        }
    }

    /// Release the held value once the interval has elapsed.
    pub fn poll(&mut self, now_ms: f64) -> Option<T> {
        if self.pending.is_some() && self.is_open(now_ms) {
            self.last_fire_ms = Some(now_ms);
            self.pending.take()
        } else {
            None
        }
    }

    #[inline]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the held value without firing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    fn is_open(&self, now_ms: f64) -> bool {
        self.last_fire_ms
            .map_or(true, |last| now_ms - last >= self.interval_ms)
    }
}
