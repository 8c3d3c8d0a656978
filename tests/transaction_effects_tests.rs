use serde_json::json;
use suifund::core::transaction_effects::{EffectsError, ExecutionStatus, TransactionEffects};

const DIGEST: &str = "DMBdBZnpYR4EeTXzXL4A6FtDpJK4dHvz9sKkT3jrJDbj";

fn success_response() -> serde_json::Value {
    json!({
        "digest": DIGEST,
        "effects": {
            "status": { "status": "success" },
            "gasUsed": {
                "computationCost": "1000000",
                "storageCost": "2964000",
                "storageRebate": "978120",
                "nonRefundableStorageFee": "9880"
            }
        },
        "checkpoint": "12345"
    })
}

#[test]
fn test_parse_success() {
    let effects = TransactionEffects::from_rpc(success_response()).unwrap();
    assert_eq!(effects.digest.as_str(), DIGEST);
    assert!(effects.status.is_success());
    assert_eq!(effects.gas.computation_cost, 1_000_000);
    assert_eq!(effects.gas.storage_cost, 2_964_000);
    assert_eq!(effects.gas.storage_rebate, 978_120);
    assert_eq!(effects.checkpoint, Some(12345));
}

#[test]
fn test_parse_failure_status() {
    let mut response = success_response();
    response["effects"]["status"] = json!({
        "status": "failure",
        "error": "MoveAbort(crowdfunding, 2)"
    });
    let effects = TransactionEffects::from_rpc(response).unwrap();
    match effects.status {
        ExecutionStatus::Failure { error } => assert!(error.contains("MoveAbort")),
        other => panic!("Expected failure status, got {other:?}"),
    }
}

#[test]
fn test_failure_without_message_still_parses() {
    let mut response = success_response();
    response["effects"]["status"] = json!({ "status": "failure" });
    let effects = TransactionEffects::from_rpc(response).unwrap();
    assert!(!effects.status.is_success());
}

#[test]
fn test_total_gas() {
    let effects = TransactionEffects::from_rpc(success_response()).unwrap();
    // computation + storage - rebate
    assert_eq!(effects.total_gas().mist, 1_000_000 + 2_964_000 - 978_120);
}

#[test]
fn test_gas_fields_accept_numbers() {
    let mut response = success_response();
    response["effects"]["gasUsed"] = json!({
        "computationCost": 1000000,
        "storageCost": 2964000,
        "storageRebate": 0
    });
    let effects = TransactionEffects::from_rpc(response).unwrap();
    assert_eq!(effects.gas.computation_cost, 1_000_000);
    assert_eq!(effects.gas.storage_rebate, 0);
}

#[test]
fn test_checkpoint_is_optional() {
    let mut response = success_response();
    response.as_object_mut().unwrap().remove("checkpoint");
    let effects = TransactionEffects::from_rpc(response).unwrap();
    assert_eq!(effects.checkpoint, None);

    let mut response = success_response();
    response["checkpoint"] = json!(null);
    let effects = TransactionEffects::from_rpc(response).unwrap();
    assert_eq!(effects.checkpoint, None);
}

#[test]
fn test_missing_digest() {
    let mut response = success_response();
    response.as_object_mut().unwrap().remove("digest");
    assert!(matches!(
        TransactionEffects::from_rpc(response),
        Err(EffectsError::MissingField(field)) if field == "digest"
    ));
}

#[test]
fn test_missing_effects() {
    let response = json!({ "digest": DIGEST });
    assert!(matches!(
        TransactionEffects::from_rpc(response),
        Err(EffectsError::MissingField(field)) if field == "effects"
    ));
}

#[test]
fn test_missing_gas_field() {
    let mut response = success_response();
    response["effects"]["gasUsed"]
        .as_object_mut()
        .unwrap()
        .remove("storageRebate");
    assert!(matches!(
        TransactionEffects::from_rpc(response),
        Err(EffectsError::MissingField(field)) if field.contains("storageRebate")
    ));
}

#[test]
fn test_unknown_status_is_an_error() {
    let mut response = success_response();
    response["effects"]["status"] = json!({ "status": "pending" });
    assert!(matches!(
        TransactionEffects::from_rpc(response),
        Err(EffectsError::InvalidField(_))
    ));
}

#[test]
fn test_invalid_digest_in_response() {
    let mut response = success_response();
    response["digest"] = json!("0xnot-base58");
    assert!(matches!(
        TransactionEffects::from_rpc(response),
        Err(EffectsError::InvalidDigest(_))
    ));
}

#[test]
fn test_non_object_response() {
    assert!(matches!(
        TransactionEffects::from_rpc(json!([])),
        Err(EffectsError::NotAnObject)
    ));
}
