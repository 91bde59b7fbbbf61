use std::time::Duration;
use tokio::time::timeout;
use venturelink::components::calls::{CallEvent, CallServiceHandle};
use venturelink::components::connections::{
    CollaborationRequest, CollaborationStore, ConnectionStatus,
};
use venturelink::components::payments::{
    validate_payment_form, PaymentRequest, PaymentServiceHandle, Recipient, TransactionKind,
};
use venturelink::components::signing::SigningServiceHandle;

/// Sending a payment debits the wallet and prepends a ledger entry
#[tokio::test]
async fn test_payment_flow() {
    let handle = PaymentServiceHandle::new(
        1000.0,
        Vec::new(),
        vec![Recipient {
            id: "1".to_string(),
            name: "Jane Smith".to_string(),
        }],
    );

    assert_eq!(handle.get_balance().await.unwrap(), 1000.0);

    let transfer = handle
        .send_payment(PaymentRequest {
            amount: 250.0,
            recipient_id: "1".to_string(),
            description: "Project payment".to_string(),
            method: "card".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(transfer.amount, -250.0);
    assert_eq!(transfer.receiver, "Jane Smith");
    assert_eq!(transfer.kind, TransactionKind::Transfer);
    assert_eq!(handle.get_balance().await.unwrap(), 750.0);

    let deposit = handle.deposit(100.0).await.unwrap();
    assert_eq!(deposit.kind, TransactionKind::Deposit);
    assert_eq!(handle.get_balance().await.unwrap(), 850.0);

    // History is newest first
    let history = handle.get_history().await.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].id, deposit.id);
    assert_eq!(history[1].id, transfer.id);

    // Unknown recipients fall back to a placeholder name
    let unknown = handle
        .send_payment(PaymentRequest {
            amount: 5.0,
            recipient_id: "nobody".to_string(),
            description: "Service fee".to_string(),
            method: "wallet".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(unknown.receiver, "Unknown");

    handle.shutdown().await.unwrap();
}

/// Form validation surfaces field-keyed messages instead of failing
#[tokio::test]
async fn test_payment_form_validation() {
    let errors = validate_payment_form("0", "", "  ");
    assert_eq!(errors.len(), 3);
    assert_eq!(errors["amount"], "Amount must be greater than 0");
    assert_eq!(errors["recipient"], "Recipient is required");
    assert_eq!(errors["description"], "Description is required");

    let errors = validate_payment_form("abc", "1", "Consulting");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors["amount"], "Amount must be a valid number");

    assert!(validate_payment_form("120.50", "1", "Consulting").is_empty());
}

/// Signing binds a signature image to a document without verifying either
#[tokio::test]
async fn test_signing_flow() {
    let handle = SigningServiceHandle::new();

    let record = handle
        .sign_document("doc-42", vec![0x89, 0x50, 0x4e, 0x47])
        .await
        .unwrap();
    assert_eq!(record.document_id, "doc-42");
    assert!(!record.signature_id.is_empty());

    // An empty signature image is accepted as-is
    let empty = handle.sign_document("doc-43", Vec::new()).await.unwrap();
    assert_ne!(empty.signature_id, record.signature_id);

    let signed = handle.get_signed_documents().await.unwrap();
    assert_eq!(signed.len(), 2);

    handle.shutdown().await.unwrap();
}

/// A call connects after the simulated delay and reports its duration on end
#[tokio::test]
async fn test_call_lifecycle() {
    let (handle, mut events) = CallServiceHandle::new(Duration::from_millis(10));

    // Ending with no call active is a no-op
    assert_eq!(handle.end_call().await.unwrap(), None);

    handle.start_call("Jane Smith").await.unwrap();

    // Only one call at a time
    assert!(handle.start_call("Robert Johnson").await.is_err());

    let connected = timeout(Duration::from_secs(5), events.recv())
        .await
        .expect("connected event should arrive")
        .unwrap();
    assert_eq!(
        connected,
        CallEvent::Connected {
            participant: "Jane Smith".to_string()
        }
    );

    let ended = handle.end_call().await.unwrap().expect("call was active");
    match &ended {
        CallEvent::Ended {
            participant,
            duration_secs,
        } => {
            assert_eq!(participant, "Jane Smith");
            assert!(*duration_secs < 5);
        }
        other => panic!("unexpected event: {:?}", other),
    }

    // The same event goes out on the stream
    let streamed = timeout(Duration::from_secs(5), events.recv())
        .await
        .expect("ended event should arrive")
        .unwrap();
    assert_eq!(streamed, ended);

    handle.shutdown().await.unwrap();
}

/// Collaboration requests settle forward only, like meeting requests
#[tokio::test]
async fn test_collaboration_inbox() {
    let first = CollaborationRequest::incoming("Jane Smith", "Interested in your seed round");
    let second = CollaborationRequest::incoming("Robert Johnson", "Saw your pitch deck");
    let first_id = first.id.clone();
    let second_id = second.id.clone();

    let mut store = CollaborationStore::new(vec![first, second]);
    assert_eq!(store.pending().len(), 2);
    assert_eq!(store.accepted_count(), 0);

    store.accept(&first_id);
    store.reject(&second_id);
    assert_eq!(store.pending().len(), 0);
    assert_eq!(store.accepted_count(), 1);

    // Settled requests cannot be reversed
    store.reject(&first_id);
    assert_eq!(store.accepted_count(), 1);
    store.accept(&second_id);
    assert_eq!(store.list()[1].status, ConnectionStatus::Rejected);

    // Unknown ids are ignored
    store.accept("no-such-request");
    assert_eq!(store.list().len(), 2);
}
