/// Custom actions for Order entities.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Withdraws an order that is still pending and unpaid.
    ///
    /// # Errors
    /// Fails for any order that has been paid for or has moved past pending.
    Cancel,
}
