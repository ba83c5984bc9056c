mod common;

use obsidian_forge_core::{
    run, ContractWriterController, CreateWalletController, ImportWalletController, NoticeKind,
    NotificationSink, Phase, PrivateKey, RemoteCall, Resolution, TokenCreatorController,
    WalletListController, EXAMPLE_PROMPTS,
};

use common::{record, MockRemote, ADDRESS_B, TEST_KEY};

#[tokio::test]
async fn empty_required_fields_never_reach_the_remote() {
    let sink = NotificationSink::new();
    let remote = MockRemote::ok();

    let mut create = CreateWalletController::new(sink.clone());
    create.set_name("   ");
    assert!(create.submit().is_none());
    assert_eq!(create.phase(), Phase::Idle);

    let mut import = ImportWalletController::new(sink.clone());
    assert!(import.submit().is_none());
    assert_eq!(import.phase(), Phase::Idle);

    let mut token = TokenCreatorController::new(sink.clone());
    token.set_name("Demo");
    assert!(token.submit().is_none());
    assert_eq!(token.phase(), Phase::Idle);

    let mut contract = ContractWriterController::new(sink.clone());
    contract.set_description("\n\t ");
    assert!(contract.submit().is_none());
    assert_eq!(contract.phase(), Phase::Idle);

    assert_eq!(remote.calls(), 0);
    let notices = sink.snapshot();
    let messages: Vec<&str> = notices.iter().map(|n| n.message.as_str()).collect();
    assert_eq!(
        messages,
        [
            "Please enter a wallet name",
            "Please enter a private key",
            "Please fill in all fields",
            "Please describe what you want to build",
        ]
    );
    assert!(notices.iter().all(|n| n.kind == NoticeKind::Error));
}

#[tokio::test]
async fn rapid_resubmits_issue_exactly_one_remote_call() {
    let sink = NotificationSink::new();
    let remote = MockRemote::ok();
    let mut ctl = CreateWalletController::new(sink.clone());

    let dispatches: Vec<_> = (0..5).filter_map(|_| ctl.submit()).collect();
    assert_eq!(dispatches.len(), 1);
    assert_eq!(ctl.phase(), Phase::Submitting);

    for dispatch in &dispatches {
        let completion = run(&remote, dispatch).await;
        let obsidian_forge_core::RemoteReply::CreatedWallet(result) = completion.reply else {
            panic!("unexpected reply kind");
        };
        assert_eq!(ctl.complete(completion.ticket, result), Resolution::Succeeded);
    }
    assert_eq!(remote.calls(), 1);
    assert_eq!(sink.len(), 1);
    assert_eq!(sink.snapshot()[0].message, "Wallet created successfully!");
}

#[tokio::test]
async fn created_key_is_masked_until_revealed_and_dropped_on_reset() {
    let sink = NotificationSink::new();
    let remote = MockRemote::ok();
    let mut ctl = CreateWalletController::new(sink.clone());
    ctl.set_name("Savings");

    let dispatch = ctl.submit().expect("dispatch");
    let completion = run(&remote, &dispatch).await;
    let obsidian_forge_core::RemoteReply::CreatedWallet(result) = completion.reply else {
        panic!("unexpected reply kind");
    };
    ctl.complete(completion.ticket, result);

    assert_eq!(ctl.created().map(|w| w.name.as_str()), Some("Savings"));
    assert_eq!(ctl.private_key_display(), Some(PrivateKey::MASK));
    assert!(ctl.toggle_reveal());
    assert_eq!(ctl.private_key_display(), Some(TEST_KEY));
    assert!(!ctl.toggle_reveal());
    assert_eq!(ctl.private_key_display(), Some(PrivateKey::MASK));

    ctl.toggle_reveal();
    ctl.reset();
    assert_eq!(ctl.phase(), Phase::Idle);
    assert!(ctl.private_key().is_none());
    assert!(!ctl.is_revealed());
    assert_eq!(ctl.name(), "Savings");
}

#[tokio::test]
async fn failed_create_preserves_the_typed_name() {
    let sink = NotificationSink::new();
    let remote = MockRemote::failing();
    let mut ctl = CreateWalletController::new(sink.clone());
    ctl.set_name("Cold storage");

    let dispatch = ctl.submit().expect("dispatch");
    let completion = run(&remote, &dispatch).await;
    let obsidian_forge_core::RemoteReply::CreatedWallet(result) = completion.reply else {
        panic!("unexpected reply kind");
    };
    assert_eq!(ctl.complete(completion.ticket, result), Resolution::Failed);

    assert_eq!(ctl.phase(), Phase::Failed);
    assert_eq!(ctl.name(), "Cold storage");
    assert!(ctl.can_submit());
    let notices = sink.snapshot();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Error);
    assert_eq!(notices[0].message, "Failed to create wallet");

    assert!(ctl.submit().is_some(), "retry is allowed after failure");
}

#[tokio::test]
async fn imported_wallet_exposes_no_secret() {
    let sink = NotificationSink::new();
    let remote = MockRemote::ok();
    let mut ctl = ImportWalletController::new(sink.clone());
    ctl.set_name("W1");
    ctl.set_private_key(TEST_KEY);

    let dispatch = ctl.submit().expect("dispatch");
    match &dispatch.call {
        RemoteCall::ImportWallet(req) => {
            assert_eq!(req.private_key.expose(), TEST_KEY);
            assert!(!format!("{dispatch:?}").contains(&TEST_KEY[2..]));
        }
        other => panic!("unexpected call {other:?}"),
    }
    let completion = run(&remote, &dispatch).await;
    let obsidian_forge_core::RemoteReply::ImportedWallet(result) = completion.reply else {
        panic!("unexpected reply kind");
    };
    ctl.complete(completion.ticket, result);

    let wallet = ctl.imported().expect("imported");
    assert_eq!(wallet.name, "W1");
    assert_eq!(wallet.address, record("W1", ADDRESS_B).address);
    let exposed = serde_json::to_value(wallet).expect("serialize");
    assert!(exposed.get("private_key").is_none());
    assert!(!ctl.has_private_key_input());
    assert_eq!(sink.snapshot()[0].message, "Wallet imported successfully!");
}

#[tokio::test]
async fn failed_import_keeps_key_for_retry() {
    let sink = NotificationSink::new();
    let remote = MockRemote::failing();
    let mut ctl = ImportWalletController::new(sink.clone());
    ctl.set_private_key("not-a-key");

    let dispatch = ctl.submit().expect("dispatch");
    let completion = run(&remote, &dispatch).await;
    let obsidian_forge_core::RemoteReply::ImportedWallet(result) = completion.reply else {
        panic!("unexpected reply kind");
    };
    ctl.complete(completion.ticket, result);

    assert!(ctl.has_private_key_input());
    assert_eq!(
        sink.snapshot()[0].message,
        "Failed to import wallet. Check your private key."
    );
}

#[tokio::test]
async fn wallet_list_fails_soft_to_empty() {
    let sink = NotificationSink::new();
    let remote = MockRemote::failing();
    let mut ctl = WalletListController::new(sink.clone());

    let dispatch = ctl.mount().expect("mount dispatches");
    assert!(ctl.is_loading());
    assert!(ctl.wallets().is_empty());
    let completion = run(&remote, &dispatch).await;
    let obsidian_forge_core::RemoteReply::Wallets(result) = completion.reply else {
        panic!("unexpected reply kind");
    };
    ctl.complete(completion.ticket, result);

    assert!(!ctl.is_loading());
    assert!(ctl.wallets().is_empty());
    assert_eq!(sink.snapshot()[0].message, "Failed to load wallets");
}

#[tokio::test]
async fn wallet_list_keeps_backend_order() {
    let sink = NotificationSink::new();
    let remote = MockRemote::ok();
    let mut ctl = WalletListController::new(sink);

    let dispatch = ctl.mount().expect("mount dispatches");
    assert!(ctl.mount().is_none(), "no second load while loading");
    let completion = run(&remote, &dispatch).await;
    let obsidian_forge_core::RemoteReply::Wallets(result) = completion.reply else {
        panic!("unexpected reply kind");
    };
    ctl.complete(completion.ticket, result);

    let names: Vec<&str> = ctl.wallets().iter().map(|w| w.name.as_str()).collect();
    assert_eq!(names, ["first", "second"]);
    assert_eq!(remote.calls(), 1);
}

#[test]
fn token_symbol_is_normalized_before_preview_and_request() {
    let mut ctl = TokenCreatorController::new(NotificationSink::new());
    ctl.set_name("My Token");
    ctl.set_symbol("mytoken");
    ctl.set_total_supply("1000000");

    assert_eq!(ctl.symbol(), "MYTOK");
    assert_eq!(ctl.preview().symbol, "MYTOK");
    assert_eq!(ctl.preview().total_supply, "1,000,000");
    let spec = ctl.spec().expect("valid spec");
    assert_eq!(spec.symbol, ctl.preview().symbol);
}

#[test]
fn token_name_is_sent_as_typed() {
    let mut ctl = TokenCreatorController::new(NotificationSink::new());
    ctl.set_name("  Demo Coin ");
    ctl.set_symbol("dmc");
    ctl.set_total_supply("5");
    assert_eq!(ctl.spec().expect("valid spec").name, "  Demo Coin ");
    assert_eq!(ctl.preview().name, "Demo Coin");
}

#[test]
fn token_preview_placeholders() {
    let ctl = TokenCreatorController::new(NotificationSink::new());
    let preview = ctl.preview();
    assert_eq!(preview.name, "Token Name");
    assert_eq!(preview.symbol, "SYMBOL");
    assert_eq!(preview.total_supply, "0");
}

#[test]
fn non_numeric_supply_is_invalid_not_zero() {
    let sink = NotificationSink::new();
    let mut ctl = TokenCreatorController::new(sink.clone());
    ctl.set_name("Demo");
    ctl.set_symbol("dmx");
    ctl.set_total_supply("lots");
    assert!(ctl.submit().is_none());
    assert_eq!(ctl.phase(), Phase::Idle);

    ctl.set_total_supply("0");
    assert!(ctl.submit().is_none());

    ctl.set_total_supply("10");
    ctl.set_decimals("-1");
    assert!(ctl.submit().is_none());

    let messages: Vec<String> = sink.snapshot().into_iter().map(|n| n.message).collect();
    assert_eq!(
        messages,
        [
            "Total supply must be a whole number",
            "Total supply must be greater than zero",
            "Decimals must be a whole number between 0 and 255",
        ]
    );
}

#[tokio::test]
async fn token_end_to_end_scenario() {
    let sink = NotificationSink::new();
    let remote = MockRemote::ok();
    let mut ctl = TokenCreatorController::new(sink.clone());
    ctl.set_name("Demo");
    ctl.set_symbol("dmx");
    ctl.set_total_supply("1000");
    ctl.set_decimals("18");

    let dispatch = ctl.submit().expect("dispatch");
    let RemoteCall::CreateToken(spec) = &dispatch.call else {
        panic!("unexpected call");
    };
    assert_eq!(
        serde_json::to_value(spec).expect("serialize"),
        serde_json::json!({"name": "Demo", "symbol": "DMX", "total_supply": 1000, "decimals": 18})
    );

    let completion = run(&remote, &dispatch).await;
    let obsidian_forge_core::RemoteReply::Token(result) = completion.reply else {
        panic!("unexpected reply kind");
    };
    ctl.complete(completion.ticket, result);

    let token = ctl.generated().expect("generated");
    assert_eq!(token.name, "Demo");
    assert_eq!(token.symbol, "DMX");
    assert_eq!(token.total_supply, 1000);
    assert_eq!(token.decimals, 18);
    assert!(!token.contract_code.is_empty());
    assert_eq!(remote.last_token.lock().expect("lock").as_ref(), Some(spec));
    assert_eq!(sink.snapshot()[0].message, "Token contract generated successfully!");

    ctl.reset();
    assert!(ctl.generated().is_none());
    assert_eq!(ctl.name(), "");
    assert_eq!(ctl.symbol(), "");
    assert_eq!(ctl.total_supply(), "");
    assert_eq!(ctl.decimals(), "18");
}

#[tokio::test]
async fn contract_writer_generate_then_generate_another() {
    let sink = NotificationSink::new();
    let remote = MockRemote::ok();
    let mut ctl = ContractWriterController::new(sink.clone());
    assert!(!ctl.can_submit());
    assert!(ctl.select_example(0));
    assert!(ctl.can_submit());

    let dispatch = ctl.submit().expect("dispatch");
    let completion = run(&remote, &dispatch).await;
    let obsidian_forge_core::RemoteReply::Contract(result) = completion.reply else {
        panic!("unexpected reply kind");
    };
    ctl.complete(completion.ticket, result);

    let generated = ctl.generated().expect("generated");
    assert!(generated.explanation.ends_with(EXAMPLE_PROMPTS[0]));
    assert_eq!(sink.snapshot()[0].message, "Smart contract generated successfully!");

    ctl.reset();
    assert_eq!(ctl.phase(), Phase::Idle);
    assert_eq!(ctl.description(), "");
}

#[tokio::test]
async fn completion_after_reset_is_dropped_silently() {
    let sink = NotificationSink::new();
    let remote = MockRemote::ok();
    let mut ctl = ContractWriterController::new(sink.clone());
    ctl.set_description("an escrow");

    let dispatch = ctl.submit().expect("dispatch");
    ctl.reset();
    let completion = run(&remote, &dispatch).await;
    let obsidian_forge_core::RemoteReply::Contract(result) = completion.reply else {
        panic!("unexpected reply kind");
    };
    assert_eq!(ctl.complete(completion.ticket, result), Resolution::Stale);
    assert!(ctl.generated().is_none());
    assert!(sink.is_empty());
}
