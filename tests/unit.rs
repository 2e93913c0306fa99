#[cfg(test)]
mod tests {
    use pics_bridge::*;
    use serde_json::{json, Value};

    #[test]
    fn registry_knows_every_channel_method() {
        let registry = MethodRegistry::new();
        assert_eq!(registry.count(), 6);
        for name in [
            methods::SHARE,
            methods::USE_AS_WALLPAPER,
            methods::REQUEST_REVIEW,
            methods::IS_ALBUM_AUTHORIZED,
            methods::OPEN_APP_SETTINGS,
            methods::SYNC_ALBUM,
        ] {
            assert!(registry.contains(name), "missing method: {name}");
        }
    }

    #[test]
    fn registry_rejects_unknown_names() {
        let registry = MethodRegistry::new();
        assert!(registry.get("foo").is_none());
        assert!(!registry.contains("Share"));
        assert!(!registry.contains("syncalbum"));
    }

    #[test]
    fn methods_listing_matches_the_wire_names() {
        let registry = MethodRegistry::new();
        let mut names = registry.methods();
        names.sort_unstable();
        assert_eq!(
            names,
            vec![
                "isAlbumAuthorized",
                "openAppSettings",
                "requestReview",
                "share",
                "syncAlbum",
                "useAsWallpaper",
            ]
        );
    }

    #[test]
    fn share_decodes_file_map() {
        let decode = MethodRegistry::new().get(methods::SHARE).unwrap();
        let call = decode(json!({"file": "/tmp/photo.png"})).unwrap();
        assert_eq!(
            call,
            MethodCall::Share(FileArgs {
                file: "/tmp/photo.png".into()
            })
        );
    }

    #[test]
    fn share_rejects_missing_file_key() {
        let decode = MethodRegistry::new().get(methods::SHARE).unwrap();
        let err = decode(json!({"path": "/tmp/photo.png"})).unwrap_err();
        assert!(matches!(err, BridgeError::BadArguments { .. }));
    }

    #[test]
    fn wallpaper_decodes_bare_string() {
        let decode = MethodRegistry::new().get(methods::USE_AS_WALLPAPER).unwrap();
        let call = decode(json!("/tmp/wall.png")).unwrap();
        assert_eq!(call, MethodCall::UseAsWallpaper("/tmp/wall.png".into()));
    }

    #[test]
    fn wallpaper_rejects_non_string_payload() {
        let decode = MethodRegistry::new().get(methods::USE_AS_WALLPAPER).unwrap();
        let err = decode(json!({"file": "/tmp/wall.png"})).unwrap_err();
        assert!(matches!(err, BridgeError::BadArguments { .. }));
    }

    #[test]
    fn review_decodes_bare_bool() {
        let decode = MethodRegistry::new().get(methods::REQUEST_REVIEW).unwrap();
        assert_eq!(
            decode(json!(true)).unwrap(),
            MethodCall::RequestReview { in_app: true }
        );
        assert_eq!(
            decode(json!(false)).unwrap(),
            MethodCall::RequestReview { in_app: false }
        );
    }

    #[test]
    fn review_rejects_non_boolean_payload() {
        let decode = MethodRegistry::new().get(methods::REQUEST_REVIEW).unwrap();
        let err = decode(json!("true")).unwrap_err();
        assert!(matches!(err, BridgeError::BadArguments { .. }));
    }

    #[test]
    fn no_argument_methods_ignore_payloads() {
        let registry = MethodRegistry::new();
        let decode = registry.get(methods::IS_ALBUM_AUTHORIZED).unwrap();
        assert_eq!(decode(Value::Null).unwrap(), MethodCall::IsAlbumAuthorized);
        assert_eq!(
            decode(json!({"junk": 1})).unwrap(),
            MethodCall::IsAlbumAuthorized
        );

        let decode = registry.get(methods::OPEN_APP_SETTINGS).unwrap();
        assert_eq!(decode(Value::Null).unwrap(), MethodCall::OpenAppSettings);
        assert_eq!(decode(json!(42)).unwrap(), MethodCall::OpenAppSettings);
    }

    #[test]
    fn sync_album_decodes_file_map() {
        let decode = MethodRegistry::new().get(methods::SYNC_ALBUM).unwrap();
        let call = decode(json!({"file": "/tmp/photo.png"})).unwrap();
        assert_eq!(
            call,
            MethodCall::SyncAlbum(FileArgs {
                file: "/tmp/photo.png".into()
            })
        );
    }

    #[test]
    fn sync_album_rejects_bare_string() {
        let decode = MethodRegistry::new().get(methods::SYNC_ALBUM).unwrap();
        let err = decode(json!("/tmp/photo.png")).unwrap_err();
        assert!(matches!(err, BridgeError::BadArguments { .. }));
    }

    #[test]
    fn method_call_reports_its_wire_name() {
        let call = MethodCall::SyncAlbum(FileArgs {
            file: "/tmp/a".into(),
        });
        assert_eq!(call.method(), "syncAlbum");
        assert_eq!(MethodCall::IsAlbumAuthorized.method(), "isAlbumAuthorized");
        assert_eq!(
            MethodCall::RequestReview { in_app: true }.method(),
            "requestReview"
        );
    }

    #[test]
    fn outcome_constructors() {
        assert_eq!(Outcome::null(), Outcome::Success(Value::Null));
        assert_eq!(Outcome::bool(true), Outcome::Success(Value::Bool(true)));
        assert!(Outcome::null().is_success());
        assert!(!Outcome::NotImplemented.is_success());

        match Outcome::failure("boom") {
            Outcome::Failure { code, message } => {
                assert_eq!(code, FAILURE_CODE);
                assert_eq!(message, "boom");
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn bridge_error_converts_to_zero_coded_failure() {
        let err = BridgeError::BadArguments {
            method: methods::SHARE,
            reason: "missing field `file`".into(),
        };
        match Outcome::from(err) {
            Outcome::Failure { code, message } => {
                assert_eq!(code, "0");
                assert!(message.contains("share"));
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn share_stub_resolves_with_null() {
        let outcome = handlers::stubs::share(FileArgs {
            file: "/tmp/photo.png".into(),
        })
        .await
        .unwrap();
        assert_eq!(outcome, Outcome::null());
    }

    #[tokio::test]
    async fn wallpaper_and_settings_stubs_are_not_implemented() {
        let outcome = handlers::stubs::use_as_wallpaper("/tmp/wall.png".into())
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::NotImplemented);

        let outcome = handlers::stubs::open_app_settings().await.unwrap();
        assert_eq!(outcome, Outcome::NotImplemented);
    }
}
