use std::str::FromStr;
use std::time::Duration;

use rust_decimal::Decimal;
use wiremock::matchers::{header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use buda_api_client::BudaError;
use buda_api_client::rest::public::TradesRequest;
use buda_api_client::rest::{BudaClient, BudaRestClient};
use buda_api_client::types::TradeDirection;

fn build_client(server: &MockServer) -> BudaRestClient {
    BudaRestClient::builder()
        .base_url(server.uri())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_get_ticker_btc_clp() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "market": {
            "id": "BTC-CLP",
            "name": "btc-clp",
            "base_currency": "BTC",
            "quote_currency": "CLP",
            "minimum_order_amount": ["0.0001", "BTC"]
        }
    });

    Mock::given(method("GET"))
        .and(path("/markets/btc-clp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let market = client.get_ticker("btc-clp").await.unwrap();

    assert_eq!(market.id, "BTC-CLP");
    assert_eq!(market.name, "btc-clp");
    assert_eq!(market.base_currency, "BTC");
    assert_eq!(market.quote_currency, "CLP");
    assert_eq!(
        market.minimum_order_amount.amount,
        Decimal::from_str("0.0001").unwrap()
    );
}

#[tokio::test]
async fn test_not_found_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/markets/doge-clp"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({ "error": "not_found" })),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.get_ticker("doge-clp").await.unwrap_err();

    assert!(matches!(err, BudaError::Decode(_)));
    assert!(err.to_string().contains("not_found"));
    assert!(err.api_error().unwrap().is_not_found());
    assert!(!err.is_local());
}

#[tokio::test]
async fn test_public_requests_are_unsigned() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/markets"))
        .and(header_exists("x-sbtc-signature"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/markets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "markets": [
                {
                    "id": "BTC-CLP",
                    "name": "btc-clp",
                    "base_currency": "BTC",
                    "quote_currency": "CLP",
                    "minimum_order_amount": ["0.0001", "BTC"]
                },
                {
                    "id": "ETH-BTC",
                    "name": "eth-btc",
                    "base_currency": "ETH",
                    "quote_currency": "BTC",
                    "minimum_order_amount": ["0.001", "ETH"]
                }
            ]
        })))
        .mount(&server)
        .await;

    let client = BudaRestClient::builder()
        .base_url(server.uri())
        .api_keys("key", "secret")
        .unwrap()
        .build()
        .unwrap();
    let markets = client.get_markets().await.unwrap();

    assert_eq!(markets.len(), 2);
    assert_eq!(markets[1].id, "ETH-BTC");
}

#[tokio::test]
async fn test_get_order_book() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "order_book": {
            "asks": [["836677.14", "0.447349"], ["837462.23", "1.43804963"]],
            "bids": [["821580.0", "0.25667389"], ["821211.0", "0.17628027"]]
        }
    });

    Mock::given(method("GET"))
        .and(path("/markets/btc-clp/order_book"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let book = client.get_order_book("btc-clp").await.unwrap();

    assert_eq!(book.asks.len(), 2);
    assert_eq!(book.bids.len(), 2);
    assert_eq!(book.best_ask().unwrap().price, Decimal::from_str("836677.14").unwrap());
    assert_eq!(book.spread(), Some(Decimal::from_str("15097.14").unwrap()));
}

#[tokio::test]
async fn test_order_book_numeric_amounts_rejected() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "order_book": { "asks": [[836677.14, 0.447349]], "bids": [] }
    });

    Mock::given(method("GET"))
        .and(path("/markets/btc-clp/order_book"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.get_order_book("btc-clp").await.unwrap_err();

    match err {
        BudaError::Decode(decode) => {
            assert_eq!(decode.expected, "order_book");
            assert_eq!(decode.status, 200);
            assert!(decode.api_error.is_none());
        }
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_trades_with_paging() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "trades": {
            "market_id": "BTC-CLP",
            "timestamp": "1476905551698",
            "last_timestamp": "1476905550000",
            "entries": [
                ["1476905551698", "0.01", "1200000.0", "buy", 1002],
                ["1476905550000", "0.5", "1199000.0", "sell", 1001]
            ]
        }
    });

    Mock::given(method("GET"))
        .and(path("/markets/btc-clp/trades"))
        .and(query_param("timestamp", "1476905551698"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = TradesRequest::before(1_476_905_551_698).limit(2);
    let trades = BudaClient::get_trades(&client, "btc-clp", &request)
        .await
        .unwrap();

    assert_eq!(trades.market_id, "BTC-CLP");
    assert_eq!(trades.entries.len(), 2);
    assert_eq!(trades.entries[0].direction, TradeDirection::Buy);
    assert_eq!(trades.entries[1].id, Some(1001));
    assert_eq!(
        trades.last_timestamp.unwrap().unix_timestamp(),
        1_476_905_550
    );
}

#[tokio::test]
async fn test_get_trades_without_query() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "trades": {
            "market_id": "BTC-CLP",
            "timestamp": null,
            "last_timestamp": null,
            "entries": []
        }
    });

    Mock::given(method("GET"))
        .and(path("/markets/btc-clp/trades"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let trades = client.get_trades("btc-clp").await.unwrap();
    assert!(trades.entries.is_empty());
    assert!(trades.last_timestamp.is_none());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].url.query().is_none());
}

#[tokio::test]
async fn test_garbled_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/markets"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"markets": [{"id": "BTC"#))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.get_markets().await.unwrap_err();
    assert!(matches!(err, BudaError::Decode(_)));
}

#[tokio::test]
async fn test_transport_error_for_unreachable_host() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let client = BudaRestClient::builder().base_url(uri).build().unwrap();
    let err = client.get_markets().await.unwrap_err();

    assert!(matches!(err, BudaError::Transport(_)));
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/markets"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "markets": [] }))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = BudaRestClient::builder()
        .base_url(server.uri())
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();
    let err = client.get_markets().await.unwrap_err();

    assert!(matches!(err, BudaError::Transport(_)), "{err:?}");
    assert!(!err.is_local());
}

#[test]
fn test_invalid_user_agent_rejected() {
    let result = BudaRestClient::builder()
        .user_agent("buda\nclient")
        .build();
    assert!(matches!(result, Err(BudaError::InvalidRequest(_))));
}
