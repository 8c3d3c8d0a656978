use httpmock::prelude::*;

use suifund::chain::chain_client::{ChainClient, ChainClientCreationError, ChainClientError};
use suifund::chain::network::{Network, NetworkConfig};
use suifund::chain::rpc_url::RpcUrl;
use suifund::chain::signer::SignedTransaction;
use suifund::core::address::SuiAddress;
use suifund::core::coin::CoinType;
use suifund::core::digest::TransactionDigest;

const DIGEST: &str = "DMBdBZnpYR4EeTXzXL4A6FtDpJK4dHvz9sKkT3jrJDbj";

fn owner() -> SuiAddress {
    SuiAddress::from_string(
        "0x0000000000000000000000000000000000000000000000000000000000000001",
    )
    .unwrap()
}

fn unreachable_rpc() -> RpcUrl {
    RpcUrl::plain("http://127.0.0.1:1/").unwrap()
}

fn rpc_from_mock_server(server: &MockServer) -> RpcUrl {
    RpcUrl::plain(&server.url("/")).unwrap()
}

#[test]
fn test_new_requires_rpc_urls() {
    let result = ChainClient::new(vec![], 5, 1);
    assert!(matches!(
        result,
        Err(ChainClientCreationError::NoRpcUrlsProvided)
    ));
}

#[test]
fn test_from_config() {
    let config = NetworkConfig::new(Network::Testnet).unwrap();
    assert!(ChainClient::from_config(&config).is_ok());
}

#[test]
fn test_get_balance_all_endpoints_failed() {
    let client = ChainClient::new(vec![unreachable_rpc()], 5, 1).unwrap();
    let result = client.get_balance(&owner(), &CoinType::sui());
    assert!(matches!(result, Err(ChainClientError::AllEndpointsFailed(_))));
}

#[test]
fn test_get_balance_parses_total_balance() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"jsonrpc":"2.0","id":1,"result":{"coinType":"0x2::sui::SUI","coinObjectCount":2,"totalBalance":"1500000000","lockedBalance":{}}}"#);
    });

    let client = ChainClient::new(vec![rpc_from_mock_server(&server)], 5, 1).unwrap();
    let balance = client.get_balance(&owner(), &CoinType::sui()).unwrap();
    assert_eq!(balance.human(), "1.5");
}

#[test]
fn test_multi_url_fallback_get_balance() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"jsonrpc":"2.0","id":1,"result":{"totalBalance":"0"}}"#);
    });

    let bad = unreachable_rpc();
    let good = rpc_from_mock_server(&server);
    let client = ChainClient::new(vec![bad, good], 5, 1).unwrap();
    let balance = client.get_balance(&owner(), &CoinType::sui()).unwrap();
    assert_eq!(balance.human(), "0");
}

#[test]
fn test_rpc_level_error_is_not_retried() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32602,"message":"Invalid params"}}"#);
    });

    let client = ChainClient::new(vec![rpc_from_mock_server(&server)], 5, 3).unwrap();
    let result = client.get_balance(&owner(), &CoinType::sui());
    match result {
        Err(ChainClientError::RpcError(msg)) => assert!(msg.contains("Invalid params")),
        other => panic!("Expected RpcError, got {other:?}"),
    }
    // The node understood the request: no retry passes happened
    mock.assert_hits(1);
}

#[test]
fn test_non_json_body_is_invalid_response() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/");
        then.status(500).body("internal error");
    });

    let client = ChainClient::new(vec![rpc_from_mock_server(&server)], 5, 1).unwrap();
    let result = client.get_balance(&owner(), &CoinType::sui());
    // Single URL failure surfaces as AllEndpointsFailed (last_error is
    // InvalidResponse internally).
    assert!(matches!(result, Err(ChainClientError::AllEndpointsFailed(_))));
}

#[test]
fn test_execute_transaction_returns_digest() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/");
        then.status(200)
            .header("content-type", "application/json")
            .body(format!(
                r#"{{"jsonrpc":"2.0","id":1,"result":{{"digest":"{DIGEST}"}}}}"#
            ));
    });

    let client = ChainClient::new(vec![rpc_from_mock_server(&server)], 5, 1).unwrap();
    let signed = SignedTransaction {
        tx_bytes: "AAACAA==".to_string(),
        signatures: vec!["AJ7k...".to_string()],
    };
    let digest = client.execute_transaction(&signed).unwrap();
    assert_eq!(digest.as_str(), DIGEST);
}

#[test]
fn test_get_transaction_not_yet_indexed() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/");
        then.status(200)
            .header("content-type", "application/json")
            .body(format!(
                r#"{{"jsonrpc":"2.0","id":1,"error":{{"code":-32602,"message":"Could not find the referenced transaction [TransactionDigest({DIGEST})]."}}}}"#
            ));
    });

    let client = ChainClient::new(vec![rpc_from_mock_server(&server)], 5, 1).unwrap();
    let digest = TransactionDigest::from_string(DIGEST).unwrap();
    let result = client.get_transaction(&digest).unwrap();
    assert!(result.is_none());
}

#[test]
fn test_get_transaction_parses_effects() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/");
        then.status(200)
            .header("content-type", "application/json")
            .body(format!(
                r#"{{"jsonrpc":"2.0","id":1,"result":{{"digest":"{DIGEST}","effects":{{"status":{{"status":"success"}},"gasUsed":{{"computationCost":"1000000","storageCost":"2964000","storageRebate":"978120"}}}},"checkpoint":"42"}}}}"#
            ));
    });

    let client = ChainClient::new(vec![rpc_from_mock_server(&server)], 5, 1).unwrap();
    let digest = TransactionDigest::from_string(DIGEST).unwrap();
    let effects = client.get_transaction(&digest).unwrap().unwrap();
    assert!(effects.status.is_success());
    assert_eq!(effects.checkpoint, Some(42));
}

#[test]
fn test_wait_for_transaction_timeout() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/");
        then.status(200)
            .header("content-type", "application/json")
            .body(format!(
                r#"{{"jsonrpc":"2.0","id":1,"error":{{"code":-32602,"message":"Could not find the referenced transaction [TransactionDigest({DIGEST})]."}}}}"#
            ));
    });

    let client = ChainClient::new(vec![rpc_from_mock_server(&server)], 5, 1).unwrap();
    let digest = TransactionDigest::from_string(DIGEST).unwrap();
    let result = client.wait_for_transaction(&digest, 1, 0.2);
    assert!(matches!(result, Err(ChainClientError::TimeoutError(_))));
}
