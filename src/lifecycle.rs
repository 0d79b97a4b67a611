//! Transition rules for the order lifecycle. These restrict what operators
//! are offered, not what the remote store accepts: the update path stays
//! unguarded, matching the backing tables.

use crate::models::{OrderStatus, PaymentStatus};

/// Next statuses an operator may move an order to from `status`. Terminal
/// states (Concluido, Cancelado) offer nothing.
pub fn allowed_transitions(status: OrderStatus) -> &'static [OrderStatus] {
    match status {
        OrderStatus::Aguardando => &[OrderStatus::EmPreparo, OrderStatus::Cancelado],
        OrderStatus::EmPreparo => &[OrderStatus::Concluido, OrderStatus::Cancelado],
        OrderStatus::Concluido | OrderStatus::Cancelado => &[],
    }
}

pub fn is_terminal(status: OrderStatus) -> bool {
    allowed_transitions(status).is_empty()
}

pub fn can_transition(from: OrderStatus, to: OrderStatus) -> bool {
    allowed_transitions(from).contains(&to)
}

/// Payment status has no state machine: all values are settable at any
/// time, independent of the order status.
pub fn payment_options() -> &'static [PaymentStatus] {
    &PaymentStatus::ALL
}
