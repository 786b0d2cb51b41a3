/// `router-list` command: show routers available for plan creation.
use super::{Command, CommandError, Context, Info};
use crate::api::{ApiClient, ApiRequest};
use crate::cli::render_table;
use crate::plan::decode_routers;

/// Lists routers as a `Name`/`Type` table, in the order the API returns them.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouterList;

impl RouterList {
    pub const INFO: Info = Info {
        name: "router-list",
        usage: "router-list",
        desc: "List all routers available for plan creation.",
        min_args: 0,
    };
}

impl Command for RouterList {
    fn info(&self) -> &'static Info {
        &Self::INFO
    }

    /// Failures here print nothing; the error itself is the report.
    fn run(&self, ctx: &mut Context<'_>, client: &dyn ApiClient) -> Result<(), CommandError> {
        let response = client.send(ApiRequest::get("/plans/routers"))?;
        if !response.is_success() {
            return Err(CommandError::Status(response.status));
        }
        let routers = decode_routers(&response.body).map_err(CommandError::Decode)?;

        let table = render_table(
            &["Name", "Type"],
            routers.iter().map(|r| [r.name.as_str(), r.kind.as_str()]),
        );
        ctx.stdout.write_all(table.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::errors::ErrorKind;
    use crate::commands::testing::{FakeClient, run};
    use crate::types::PlanRouter;

    #[test]
    fn test_info() {
        assert_eq!(
            *RouterList.info(),
            Info {
                name: "router-list",
                usage: "router-list",
                desc: "List all routers available for plan creation.",
                min_args: 0,
            }
        );
    }

    #[test]
    fn test_list() {
        let routers = vec![
            PlanRouter {
                name: "router1".to_owned(),
                kind: "foo".to_owned(),
            },
            PlanRouter {
                name: "router2".to_owned(),
                kind: "bar".to_owned(),
            },
        ];
        let client = FakeClient::new(200, &serde_json::to_string(&routers).unwrap());
        let (result, out) = run(&RouterList, &[], &client);
        assert!(result.is_ok());
        assert_eq!(
            out,
            "+---------+------+\n\
             | Name    | Type |\n\
             +---------+------+\n\
             | router1 | foo  |\n\
             +---------+------+\n\
             | router2 | bar  |\n\
             +---------+------+\n"
        );
        assert_eq!(client.requests(), vec![ApiRequest::get("/plans/routers")]);
    }

    #[test]
    fn test_list_malformed_body() {
        let client = FakeClient::new(200, "<html>oops</html>");
        let (result, out) = run(&RouterList, &[], &client);
        assert!(matches!(result, Err(CommandError::Decode(_))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_list_error_status_prints_nothing() {
        let client = FakeClient::new(500, "");
        let (result, out) = run(&RouterList, &[], &client);
        assert_eq!(result.unwrap_err().kind(), ErrorKind::Transport);
        assert!(out.is_empty());
    }
}
