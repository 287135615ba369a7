mod common;

use api::WalletInfoService;
use blockchain::{OwnedObject, SUI_COIN_TYPE};
use common::*;
use rust_decimal::Decimal;
use serde_json::json;
use shared::{Blocklist, Error};
use std::str::FromStr;
use std::sync::Arc;

fn service(rpc: Arc<FakeSuiRpc>) -> WalletInfoService {
    WalletInfoService::new(rpc, Blocklist::default(), 4)
}

#[tokio::test]
async fn test_empty_wallet() {
    let rpc = Arc::new(FakeSuiRpc::new().with_page(vec![]));
    let info = service(rpc).get_wallet_info(OWNER).await.unwrap();

    assert_eq!(info.sui_balance, Decimal::ZERO);
    assert!(info.tokens.is_empty());
    assert!(info.nfts.is_empty());
}

#[tokio::test]
async fn test_aggregates_across_pages() {
    let rpc = Arc::new(
        FakeSuiRpc::new()
            .with_page(vec![coin(SUI_COIN_TYPE, "1500000000"), coin(USDC, "1250000")])
            .with_page(vec![
                coin(SUI_COIN_TYPE, "500000000"),
                coin(USDC, "750000"),
                nft("0xabc::art::Piece", "Sunset", "https://img.example/1.png", "0xn1"),
            ])
            .with_metadata(USDC, "USDC", 6),
    );

    let info = service(rpc.clone()).get_wallet_info(OWNER).await.unwrap();

    assert_eq!(info.sui_balance, Decimal::from(2));
    assert_eq!(info.tokens.len(), 1);
    assert_eq!(info.tokens[0].coin_type, USDC);
    assert_eq!(info.tokens[0].amount, Decimal::from(2));
    assert_eq!(info.tokens[0].symbol, "USDC");
    assert_eq!(info.nfts.len(), 1);
    assert_eq!(info.nfts[0].name, "Sunset");
    assert_eq!(info.nfts[0].oid, "0xn1");

    let cursors = rpc.cursors_seen.lock().unwrap().clone();
    assert_eq!(cursors, vec![None, Some("1".to_string())]);
}

#[tokio::test]
async fn test_metadata_fetched_once_per_type() {
    let rpc = Arc::new(
        FakeSuiRpc::new()
            .with_page(vec![coin(USDC, "1"), coin(USDC, "2"), coin(USDC, "3")])
            .with_metadata(USDC, "USDC", 6),
    );

    service(rpc.clone()).get_wallet_info(OWNER).await.unwrap();

    let requests = rpc.metadata_requests.lock().unwrap().clone();
    assert_eq!(requests, vec![USDC.to_string()]);
}

#[tokio::test]
async fn test_metadata_failure_only_drops_that_type() {
    let broken = "0xbeef::broken::BROKEN";
    let rpc = Arc::new(
        FakeSuiRpc::new()
            .with_page(vec![coin(USDC, "2500000"), coin(broken, "100")])
            .with_metadata(USDC, "USDC", 6)
            .with_failing_metadata(broken),
    );

    let info = service(rpc).get_wallet_info(OWNER).await.unwrap();

    assert_eq!(info.tokens.len(), 1);
    assert_eq!(info.tokens[0].amount, Decimal::from_str("2.5").unwrap());
}

#[tokio::test]
async fn test_native_balance_without_metadata_uses_nine_decimals() {
    let rpc = Arc::new(FakeSuiRpc::new().with_page(vec![coin(SUI_COIN_TYPE, "123456789")]));

    let info = service(rpc).get_wallet_info(OWNER).await.unwrap();

    assert_eq!(info.sui_balance, Decimal::from_str("0.123456789").unwrap());
}

#[tokio::test]
async fn test_spoofed_native_types_never_surface() {
    let fake_sui = "0xdead::sui::SUI";
    let fake_asui = "0xdead::asui::ASUI";
    let rpc = Arc::new(
        FakeSuiRpc::new()
            .with_page(vec![coin(fake_sui, "1000000000"), coin(fake_asui, "5")])
            .with_metadata(fake_sui, "SUI", 9)
            .with_metadata(fake_asui, "aSUI", 9),
    );

    let info = service(rpc.clone()).get_wallet_info(OWNER).await.unwrap();

    assert_eq!(info.sui_balance, Decimal::ZERO);
    assert!(info.tokens.is_empty());
    assert!(rpc.metadata_requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_packages_and_blocklisted_objects_excluded() {
    let airdrop = "0xbad::drop::Airdrop";
    let rpc = Arc::new(
        FakeSuiRpc::new()
            .with_page(vec![
                OwnedObject::package(),
                nft(airdrop, "Claim now", "https://scam.example/x.png", "0xs1"),
                nft("0xabc::art::Piece", "Kept", "https://img.example/k.png", "0xk1"),
            ]),
    );
    let blocklist = Blocklist::new(Vec::new(), vec![airdrop.to_string()]);

    let info = WalletInfoService::new(rpc, blocklist, 2)
        .get_wallet_info(OWNER)
        .await
        .unwrap();

    assert_eq!(info.nfts.len(), 1);
    assert_eq!(info.nfts[0].name, "Kept");
}

#[tokio::test]
async fn test_nft_name_defaults_and_nested_url() {
    let rpc = Arc::new(FakeSuiRpc::new().with_page(vec![OwnedObject::move_object(
        "0xabc::ticket::Ticket",
        json!({ "url": { "url": "https://img.example/t.png" } }),
    )]));

    let info = service(rpc).get_wallet_info(OWNER).await.unwrap();

    assert_eq!(info.nfts.len(), 1);
    assert_eq!(info.nfts[0].name, "Unknown");
    assert_eq!(info.nfts[0].icon.as_deref(), Some("https://img.example/t.png"));
    assert_eq!(info.nfts[0].oid, "");
}

#[tokio::test]
async fn test_nft_with_empty_name_reported_as_unknown() {
    let rpc = Arc::new(FakeSuiRpc::new().with_page(vec![nft(
        "0xabc::art::Piece",
        "",
        "https://img.example/e.png",
        "0xe1",
    )]));

    let info = service(rpc).get_wallet_info(OWNER).await.unwrap();

    assert_eq!(info.nfts[0].name, "Unknown");
}

#[tokio::test]
async fn test_token_with_more_than_28_decimals_is_kept() {
    let rpc = Arc::new(
        FakeSuiRpc::new()
            .with_page(vec![coin("0xabc::tiny::TINY", "1000000000000000000")])
            .with_metadata("0xabc::tiny::TINY", "TINY", 30),
    );

    let info = service(rpc).get_wallet_info(OWNER).await.unwrap();

    assert_eq!(info.tokens.len(), 1);
    assert_eq!(info.tokens[0].amount, Decimal::from_str("0.000000000001").unwrap());
}

#[tokio::test]
async fn test_tokens_sorted_by_coin_type() {
    let rpc = Arc::new(
        FakeSuiRpc::new()
            .with_page(vec![coin("0xff::z::Z", "1"), coin("0x11::a::A", "1")])
            .with_metadata("0xff::z::Z", "Z", 0)
            .with_metadata("0x11::a::A", "A", 0),
    );

    let info = service(rpc).get_wallet_info(OWNER).await.unwrap();

    let order: Vec<_> = info.tokens.iter().map(|t| t.coin_type.as_str()).collect();
    assert_eq!(order, vec!["0x11::a::A", "0xff::z::Z"]);
}

#[tokio::test]
async fn test_fetch_failure_propagates() {
    let rpc = Arc::new(FakeSuiRpc::failing());

    let result = service(rpc).get_wallet_info(OWNER).await;

    assert!(matches!(result, Err(Error::SuiRpc(_))));
}

#[tokio::test]
async fn test_repeated_cursor_fails_instead_of_truncating() {
    let mut fake = FakeSuiRpc::new().with_page(vec![coin(SUI_COIN_TYPE, "1000000000")]);
    fake.stalled_cursor = Some("same".to_string());
    let rpc = Arc::new(fake);

    let result = service(rpc.clone()).get_wallet_info(OWNER).await;

    assert!(matches!(result, Err(Error::SuiRpc(_))));
    let cursors = rpc.cursors_seen.lock().unwrap().clone();
    assert_eq!(cursors, vec![None, Some("same".to_string())]);
}

#[tokio::test]
async fn test_missing_cursor_with_more_pages_fails() {
    let mut fake = FakeSuiRpc::new().with_page(vec![coin(SUI_COIN_TYPE, "1000000000")]);
    fake.stalled_cursor = Some(String::new());

    let result = service(Arc::new(fake)).get_wallet_info(OWNER).await;

    assert!(matches!(result, Err(Error::SuiRpc(_))));
}

#[tokio::test]
async fn test_invalid_address_rejected_before_any_call() {
    let rpc = Arc::new(FakeSuiRpc::new());

    let result = service(rpc.clone()).get_wallet_info("not-an-address").await;

    assert!(matches!(result, Err(Error::InvalidWalletAddress(_))));
    assert!(rpc.cursors_seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_get_balance() {
    let mut fake = FakeSuiRpc::new();
    fake.total_balance = "2500000000".to_string();

    let balance = service(Arc::new(fake)).get_balance(OWNER).await.unwrap();

    assert_eq!(balance.total_balance_mist, 2_500_000_000);
    assert_eq!(balance.sui_balance, Decimal::from_str("2.5").unwrap());
    assert_eq!(balance.address, OWNER);
}
