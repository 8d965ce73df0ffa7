use ferry_model::{AssignedTask, FetcherUri, KeyValue};
use ferry_proto::{DurationInfo, Environment, KillPolicy, Parameter, command_info, environment};

use crate::constants::{
    DOCKER_CREDENTIALS_URI, ENV_CLUSTER, ENV_JOB_NAME, ENV_TASK_ID, ENV_TASK_INSTANCE,
};

/// Task-declared artifact; never marked executable.
pub fn to_fetcher_uri(u: &FetcherUri) -> command_info::Uri {
    command_info::Uri {
        value: u.value.clone(),
        executable: Some(false),
        extract: Some(u.extract),
        cache: Some(u.cache),
        ..Default::default()
    }
}

pub fn credentials_uri() -> command_info::Uri {
    command_info::Uri {
        value: DOCKER_CREDENTIALS_URI.to_string(),
        ..Default::default()
    }
}

/// Launch parameters, order preserved.
pub fn to_parameters(params: &[KeyValue]) -> Vec<Parameter> {
    params
        .iter()
        .map(|p| Parameter {
            key: p.key().to_string(),
            value: p.value().to_string(),
        })
        .collect()
}

/// The four variables exported to every legacy container.
pub fn to_environment(task: &AssignedTask, cluster: &str) -> Environment {
    let var = |name: &str, value: &str| environment::Variable {
        name: name.to_string(),
        value: Some(value.to_string()),
    };

    Environment {
        variables: vec![
            var(ENV_TASK_ID, &task.task_id),
            var(ENV_TASK_INSTANCE, &task.instance_id.to_string()),
            var(ENV_JOB_NAME, &task.task.job.name),
            var(ENV_CLUSTER, cluster),
        ],
    }
}

/// Saturates at the largest representable duration.
pub fn to_kill_policy(grace_period_ms: u64) -> KillPolicy {
    let nanoseconds = i64::try_from(grace_period_ms)
        .unwrap_or(i64::MAX)
        .saturating_mul(1_000_000);

    KillPolicy {
        grace_period: Some(DurationInfo { nanoseconds }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferry_model::{JobKey, ResourceRequest, TaskConfig};

    #[test]
    fn fetcher_uri_flags() {
        let mut u = FetcherUri::new("http://artifacts/app.tgz");
        u.cache = true;

        let uri = to_fetcher_uri(&u);
        assert_eq!(uri.value, "http://artifacts/app.tgz");
        assert_eq!(uri.executable, Some(false));
        assert_eq!(uri.extract, Some(true));
        assert_eq!(uri.cache, Some(true));
    }

    #[test]
    fn parameters_keep_order_and_duplicates() {
        let params = [
            KeyValue::new("label", "x"),
            KeyValue::new("env", "A=1"),
            KeyValue::new("label", "y"),
        ];
        let out: Vec<_> = to_parameters(&params)
            .into_iter()
            .map(|p| (p.key, p.value))
            .collect();

        assert_eq!(
            out,
            [
                ("label".to_string(), "x".to_string()),
                ("env".to_string(), "A=1".to_string()),
                ("label".to_string(), "y".to_string()),
            ]
        );
    }

    #[test]
    fn environment_has_fixed_variables() {
        let task = AssignedTask::new(
            "task-1",
            12,
            TaskConfig::new(JobKey::new("r", "e", "web"), ResourceRequest::default()),
        );
        let env = to_environment(&task, "west");

        let vars: Vec<_> = env
            .variables
            .iter()
            .map(|v| (v.name.as_str(), v.value.as_deref().unwrap_or_default()))
            .collect();
        assert_eq!(
            vars,
            [
                ("AURORA_TASK_ID", "task-1"),
                ("AURORA_TASK_INSTANCE", "12"),
                ("AURORA_JOB_NAME", "web"),
                ("AURORA_CLUSTER", "west"),
            ]
        );
    }

    #[test]
    fn kill_policy_in_nanoseconds() {
        let p = to_kill_policy(1_500);
        assert_eq!(p.grace_period.unwrap().nanoseconds, 1_500_000_000);

        let p = to_kill_policy(u64::MAX);
        assert_eq!(p.grace_period.unwrap().nanoseconds, i64::MAX);
    }
}
