use std::error::Error;
use std::io::{self, Write};

/// Writes `err` followed by every error in its source chain, one per line.
pub fn report_error(err: &dyn Error, w: &mut impl Write) -> io::Result<()> {
    writeln!(w, "error: {err}")?;
    let mut source = err.source();
    while let Some(cause) = source {
        writeln!(w, "  caused by: {cause}")?;
        source = cause.source();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use banter_core::ModelClient;
    use banter_model::{ErrorKind, ModelMessage, ModelRequest};
    use banter_test_model::TestModelProvider;

    use super::*;
    use crate::SessionError;

    #[tokio::test]
    async fn test_reports_whole_chain() {
        let provider = TestModelProvider::default();
        provider.add_failure_step(ErrorKind::Unauthorized);
        let err = ModelClient::new(provider)
            .send_request(ModelRequest {
                messages: vec![ModelMessage::user(None, "Hi")],
            })
            .await
            .unwrap_err();
        let err = SessionError::from(err);

        let mut output = Vec::new();
        report_error(&err, &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "error: conversation stopped\n\
             \x20 caused by: remote completion call failed\n\
             \x20 caused by: scripted failure (unauthorized)\n"
        );
    }

    #[test]
    fn test_reports_single_error() {
        let err = io::Error::other("stdin closed");
        let mut output = Vec::new();
        report_error(&err, &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "error: stdin closed\n");
    }
}
