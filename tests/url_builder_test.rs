#[cfg(test)]
mod tests {
    use anyhow::Result;
    use migadu_api::{Error, SegmentName, UrlBuilder, API_BASE_URL};

    #[test]
    fn test_domain_only_address() -> Result<()> {
        let mut builder = UrlBuilder::default();
        builder.domain("mydomain.org")?;
        assert_eq!(
            builder.render(None, false)?,
            format!("{API_BASE_URL}/domains/mydomain.org"),
        );
        Ok(())
    }

    #[test]
    fn test_empty_domain_always_fails() {
        let mut builder = UrlBuilder::default();
        assert!(matches!(builder.domain(""), Err(Error::EmptyArgument(_))));

        // Independent of prior builder state.
        builder.domain("mydomain.org").unwrap();
        builder.mailboxes(Some("demo")).unwrap();
        assert!(matches!(builder.domain("   "), Err(Error::EmptyArgument(_))));
    }

    #[test]
    fn test_prerequisite_errors_name_the_missing_ancestor() {
        let mut builder = UrlBuilder::default();
        assert_eq!(
            builder.mailboxes(Some("demo")).unwrap_err().to_string(),
            "Domain is not set",
        );

        builder.domain("mydomain.org").unwrap();
        assert_eq!(
            builder.identities(None).unwrap_err().to_string(),
            "Mailbox is not set",
        );
        assert_eq!(
            builder.forwardings(None).unwrap_err().to_string(),
            "Mailbox is not set",
        );
    }

    #[test]
    fn test_chained_segments_render_in_order() -> Result<()> {
        let mut builder = UrlBuilder::default();
        builder
            .domain("mydomain.org")?
            .mailboxes(Some("demo"))?
            .identities(Some("support"))?;

        assert_eq!(
            builder.render(None, false)?,
            format!("{API_BASE_URL}/domains/mydomain.org/mailboxes/demo/identities/support"),
        );
        assert_eq!(builder.to_string(), builder.render(None, false)?);
        Ok(())
    }

    #[test]
    fn test_collection_mode_suppresses_own_value() -> Result<()> {
        let mut builder = UrlBuilder::default();
        builder.domain("mydomain.org")?.mailboxes(Some("demo"))?;

        assert_eq!(
            builder.render(Some(SegmentName::Mailboxes), true)?,
            format!("{API_BASE_URL}/domains/mydomain.org/mailboxes"),
        );
        Ok(())
    }

    #[test]
    fn test_round_trip_through_destructure() -> Result<()> {
        let mut builder = UrlBuilder::default();
        builder.domain("mydomain.org")?.rewrites(Some("demo"))?;
        let url = builder.render(Some(SegmentName::Rewrites), false)?;

        let segments = UrlBuilder::destructure(&url);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].name, SegmentName::Domains);
        assert_eq!(segments[0].value.as_deref(), Some("mydomain.org"));
        assert_eq!(segments[1].name, SegmentName::Rewrites);
        assert_eq!(segments[1].value.as_deref(), Some("demo"));
        Ok(())
    }

    #[test]
    fn test_destructure_rejects_malformed_urls() {
        // Consecutive slashes shift a known name into value position.
        assert!(UrlBuilder::destructure(
            "https://api.migadu.com/v1/domains////mailboxes/demo/forwardings/ext@external.com",
        )
        .is_empty());

        // Unrecognized top path component.
        assert!(UrlBuilder::destructure(
            "https://api.migadu.com/v1/domain/mailboxes/demo/forwardings/ext@external.com",
        )
        .is_empty());

        // Version prefix mismatch.
        assert!(UrlBuilder::destructure(
            "https://api.migadu.com/v2/domains/mydomain.org/mailboxes/demo",
        )
        .is_empty());

        // Trailing unrecognized segment after a complete valid chain.
        assert!(UrlBuilder::destructure(
            "https://api.migadu.com/v1/domains/mydomain.org/mailboxes/demo/whatever",
        )
        .is_empty());
    }
}
