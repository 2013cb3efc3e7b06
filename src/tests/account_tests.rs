//! tests/account_tests.rs - account snapshot normalization coverage

#[cfg(test)]
mod tests {
    use crate::ingest::account::{
        account_row, decode_account_data, parse_account, parse_program_accounts,
        ACCOUNT_FETCH_CAP,
    };
    use crate::models::RawProgramAccount;
    use serde_json::{json, Value};

    const OWNER_ADDR: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";

    fn raw_account(pubkey: &str, lamports: u64, data: Value) -> RawProgramAccount {
        serde_json::from_value(json!({
            "pubkey": pubkey,
            "account": {
                "lamports": lamports,
                "owner": OWNER_ADDR,
                "data": data,
                "executable": false,
                "rentEpoch": 361,
                "space": 165,
            },
        }))
        .unwrap()
    }

    #[test]
    fn sol_balance_is_lamports_over_one_billion() {
        let parsed = parse_account(&raw_account("acct", 1_500_000_000, json!(["", "base64"])));
        assert_eq!(parsed.sol_balance, 1.5);

        let parsed = parse_account(&raw_account("acct", 1, json!(["", "base64"])));
        assert_eq!(parsed.sol_balance, 0.000000001);
    }

    #[test]
    fn sol_balance_is_zero_for_zero_lamports() {
        let parsed = parse_account(&raw_account("acct", 0, json!(["", "base64"])));
        assert_eq!(parsed.sol_balance, 0.0);
    }

    #[test]
    fn base64_tagged_data_round_trips() {
        let payload = b"account state bytes";
        let data = json!([base64::encode(payload), "base64"]);

        assert_eq!(decode_account_data(&data), payload.to_vec());
    }

    #[test]
    fn non_base64_tag_yields_empty_buffer() {
        let data = json!([base64::encode(b"bytes"), "base58"]);
        assert!(decode_account_data(&data).is_empty());
    }

    #[test]
    fn non_pair_shapes_yield_empty_buffer() {
        assert!(decode_account_data(&json!("just a string")).is_empty());
        assert!(decode_account_data(&json!(["only one element"])).is_empty());
        assert!(decode_account_data(&json!(null)).is_empty());
        assert!(decode_account_data(&json!({"parsed": {}})).is_empty());
    }

    #[test]
    fn invalid_base64_payload_yields_empty_buffer() {
        let data = json!(["this is !!! not base64", "base64"]);
        assert!(decode_account_data(&data).is_empty());
    }

    #[test]
    fn account_row_decodes_fields_for_storage() {
        let payload = b"hello";
        let raw = raw_account("acct", 2_039_280, json!([base64::encode(payload), "base64"]));

        let row = account_row(&raw);

        assert_eq!(row.pubkey, "acct");
        assert_eq!(row.owner, OWNER_ADDR);
        assert_eq!(row.lamports, 2_039_280);
        assert!(!row.executable);
        assert_eq!(row.rent_epoch, 361);
        assert_eq!(row.space, 165);
        assert_eq!(row.data, payload.to_vec());
    }

    #[test]
    fn snapshot_never_exceeds_the_fetch_cap() {
        let entries: Vec<Value> = (0..ACCOUNT_FETCH_CAP + 5)
            .map(|i| {
                json!({
                    "pubkey": format!("acct_{}", i),
                    "account": {
                        "lamports": 100,
                        "owner": OWNER_ADDR,
                        "data": ["", "base64"],
                        "executable": false,
                        "rentEpoch": 0,
                        "space": 0,
                    },
                })
            })
            .collect();

        let accounts = parse_program_accounts(Value::Array(entries)).unwrap();

        assert_eq!(accounts.len(), ACCOUNT_FETCH_CAP);
        for (i, account) in accounts.iter().enumerate() {
            assert_eq!(
                account.pubkey,
                format!("acct_{}", i),
                "truncation keeps the first entries in order"
            );
        }
    }

    #[test]
    fn short_snapshot_is_passed_through() {
        let entries = json!([
            {
                "pubkey": "only",
                "account": {"lamports": 5, "owner": OWNER_ADDR, "data": ["", "base64"]},
            },
        ]);

        let accounts = parse_program_accounts(entries).unwrap();

        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].pubkey, "only");
        assert_eq!(accounts[0].account.lamports, 5);
    }

    #[test]
    fn malformed_snapshot_payload_is_rejected() {
        let err = parse_program_accounts(json!({"not": "a list"}));
        assert!(err.is_err());
    }
}
