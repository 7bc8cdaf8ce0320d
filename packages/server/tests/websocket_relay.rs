//! WebSocket presence and relay integration tests.

mod fixtures;
use fixtures::{TestServer, next_of_type, send_json, user_ids, wait_online_users};

use serde_json::json;

#[tokio::test]
async fn test_register_broadcasts_online_users() {
    // テスト項目: register すると全接続に最新のオンライン一覧が届く
    // given (前提条件):
    let server = TestServer::start().await;
    let mut observer = server.connect(Some("observer")).await;
    wait_online_users(&mut observer, |users| users.len() == 1)
        .await
        .expect("observer online");
    let mut alice = server.connect(None).await;

    // when (操作):
    send_json(&mut alice, json!({ "type": "register", "user_id": "alice" })).await;

    // then (期待する結果):
    let seen = wait_online_users(&mut observer, |users| users.len() == 2)
        .await
        .expect("observer should see alice");
    assert_eq!(user_ids(&seen), vec!["observer", "alice"]);
    assert!(seen["users"][1]["connection_id"].is_string());

    let own = next_of_type(&mut alice, "online-users")
        .await
        .expect("registering connection also receives the list");
    assert_eq!(user_ids(&own), vec!["observer", "alice"]);
}

#[tokio::test]
async fn test_relay_delivers_to_receiver_only() {
    // テスト項目: オンラインの受信者にだけ message-received が 1 件届く
    // given (前提条件):
    let server = TestServer::start().await;
    let mut alice = server.connect(Some("alice")).await;
    let mut bob = server.connect(Some("bob")).await;
    wait_online_users(&mut alice, |users| users.len() == 2)
        .await
        .expect("both users online");

    // when (操作):
    send_json(
        &mut alice,
        json!({ "type": "send-message", "sender_id": "alice", "receiver_id": "bob", "text": "hi" }),
    )
    .await;

    // then (期待する結果):
    let received = next_of_type(&mut bob, "message-received")
        .await
        .expect("bob receives the message");
    assert_eq!(received, json!({ "type": "message-received", "sender_id": "alice", "text": "hi" }));
    assert!(next_of_type(&mut bob, "message-received").await.is_none());
    assert!(next_of_type(&mut alice, "message-received").await.is_none());
}

#[tokio::test]
async fn test_relay_to_offline_user_is_dropped() {
    // テスト項目: 未登録ユーザー宛てのメッセージは誰にも届かず、接続も維持される
    // given (前提条件):
    let server = TestServer::start().await;
    let mut alice = server.connect(Some("alice")).await;
    wait_online_users(&mut alice, |users| users.len() == 1)
        .await
        .expect("alice online");

    // when (操作):
    send_json(
        &mut alice,
        json!({ "type": "send-message", "sender_id": "alice", "receiver_id": "carol", "text": "hi" }),
    )
    .await;

    // then (期待する結果):
    assert!(next_of_type(&mut alice, "message-received").await.is_none());
    let mut bob = server.connect(Some("bob")).await;
    let seen = wait_online_users(&mut bob, |users| users.len() == 2)
        .await
        .expect("server still serves alice");
    assert_eq!(user_ids(&seen), vec!["alice", "bob"]);
}

#[tokio::test]
async fn test_disconnect_unregisters_and_stops_relay() {
    // テスト項目: 切断後はオンライン一覧から消え、以後の中継は誰にも届かず、保留もされない
    // given (前提条件):
    let server = TestServer::start().await;
    let mut alice = server.connect(Some("alice")).await;
    let mut bob = server.connect(Some("bob")).await;
    wait_online_users(&mut alice, |users| users.len() == 2)
        .await
        .expect("both users online");
    bob.close(None).await.expect("Failed to close");
    let seen = wait_online_users(&mut alice, |users| users.len() == 1)
        .await
        .expect("alice sees bob leave");

    // when (操作):
    send_json(
        &mut alice,
        json!({ "type": "send-message", "sender_id": "alice", "receiver_id": "bob", "text": "hi" }),
    )
    .await;
    // 同じ接続のフレームは順に処理されるため、この再登録の一覧が届いた時点で中継は処理済み
    send_json(&mut alice, json!({ "type": "register", "user_id": "alice" })).await;
    wait_online_users(&mut alice, |users| users.len() == 1)
        .await
        .expect("alice's frames processed");
    let mut bob_again = server.connect(Some("bob")).await;
    wait_online_users(&mut bob_again, |users| users.len() == 2)
        .await
        .expect("bob back online");

    // then (期待する結果):
    assert_eq!(user_ids(&seen), vec!["alice"]);
    assert!(next_of_type(&mut bob_again, "message-received").await.is_none());
    assert!(next_of_type(&mut alice, "message-received").await.is_none());
}

#[tokio::test]
async fn test_duplicate_registration_keeps_first_connection() {
    // テスト項目: 同じユーザーの 2 本目の接続は登録されず、中継は最初の接続に届く
    // given (前提条件):
    let server = TestServer::start().await;
    let mut first = server.connect(Some("alice")).await;
    wait_online_users(&mut first, |users| users.len() == 1)
        .await
        .expect("alice online");
    let mut second = server.connect(None).await;
    send_json(&mut second, json!({ "type": "register", "user_id": "alice" })).await;
    let seen = next_of_type(&mut second, "online-users")
        .await
        .expect("second connection receives the list");
    let mut bob = server.connect(Some("bob")).await;
    wait_online_users(&mut bob, |users| users.len() == 2)
        .await
        .expect("bob online");

    // when (操作):
    send_json(
        &mut bob,
        json!({ "type": "send-message", "sender_id": "bob", "receiver_id": "alice", "text": "yo" }),
    )
    .await;

    // then (期待する結果):
    assert_eq!(user_ids(&seen), vec!["alice"]);
    let received = next_of_type(&mut first, "message-received")
        .await
        .expect("first connection receives the relay");
    assert_eq!(received["sender_id"], "bob");
    assert!(next_of_type(&mut second, "message-received").await.is_none());
}

#[tokio::test]
async fn test_malformed_frames_are_ignored() {
    // テスト項目: 不正なフレームは無視され、接続は維持される
    // given (前提条件):
    let server = TestServer::start().await;
    let mut alice = server.connect(None).await;

    // when (操作):
    send_json(&mut alice, json!({ "type": "unknown" })).await;
    send_json(&mut alice, json!({ "type": "register", "user_id": "" })).await;
    send_json(&mut alice, json!({ "type": "register", "user_id": "alice" })).await;

    // then (期待する結果):
    let seen = next_of_type(&mut alice, "online-users")
        .await
        .expect("valid register still works");
    assert_eq!(user_ids(&seen), vec!["alice"]);
}
