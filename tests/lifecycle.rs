use axum_orders_dashboard::lifecycle;
use axum_orders_dashboard::models::{OrderStatus, PaymentStatus};

#[test]
fn awaiting_orders_can_be_prepared_or_cancelled() {
    let next = lifecycle::allowed_transitions(OrderStatus::Aguardando);
    assert_eq!(next, &[OrderStatus::EmPreparo, OrderStatus::Cancelado]);
}

#[test]
fn in_preparation_orders_can_be_completed_or_cancelled() {
    let next = lifecycle::allowed_transitions(OrderStatus::EmPreparo);
    assert_eq!(next, &[OrderStatus::Concluido, OrderStatus::Cancelado]);
}

#[test]
fn terminal_states_offer_no_transitions() {
    for status in [OrderStatus::Concluido, OrderStatus::Cancelado] {
        assert!(lifecycle::allowed_transitions(status).is_empty());
        assert!(lifecycle::is_terminal(status));
    }
    assert!(!lifecycle::is_terminal(OrderStatus::Aguardando));
    assert!(!lifecycle::is_terminal(OrderStatus::EmPreparo));
}

#[test]
fn can_transition_follows_the_allowed_set() {
    assert!(lifecycle::can_transition(
        OrderStatus::Aguardando,
        OrderStatus::EmPreparo
    ));
    assert!(!lifecycle::can_transition(
        OrderStatus::Aguardando,
        OrderStatus::Concluido
    ));
    assert!(!lifecycle::can_transition(
        OrderStatus::Concluido,
        OrderStatus::EmPreparo
    ));
    assert!(!lifecycle::can_transition(
        OrderStatus::Cancelado,
        OrderStatus::Aguardando
    ));
}

#[test]
fn payment_is_unconstrained_by_order_status() {
    // Every payment value stays on offer whatever the order status is.
    let options = lifecycle::payment_options();
    assert_eq!(options, &PaymentStatus::ALL);
    for status in OrderStatus::ALL {
        assert_eq!(lifecycle::payment_options().len(), 3, "status {status}");
    }
}

#[test]
fn every_status_round_trips_through_its_wire_label() {
    for status in OrderStatus::ALL {
        assert_eq!(OrderStatus::from_wire(status.as_str()), Some(status));
    }
    for payment in PaymentStatus::ALL {
        assert_eq!(PaymentStatus::from_wire(payment.as_str()), Some(payment));
    }
    assert_eq!(OrderStatus::from_wire("algo inválido"), None);
}
