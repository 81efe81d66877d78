//! Sandboxed process environment and working directory for boundary tests.

use anyhow::{Result, anyhow};

/// Executes `f` inside a [`figment::Jail`], returning the closure's output.
///
/// The jail is torn down automatically once the closure completes, even when
/// the closure returns an error. Environment variables set through the jail
/// are removed again on exit.
///
/// # Errors
///
/// Returns an error if the jail initialisation fails or the closure returns a
/// [`figment::Error`].
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
{
    let mut output = None;
    figment::Jail::try_with(|j| {
        output = Some(f(j)?);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    output.ok_or_else(|| anyhow!("jail closure did not return a value"))
}

/// Sets every `(name, value)` pair as an environment variable in `jail`.
pub fn set_env(jail: &mut figment::Jail, vars: &[(&str, &str)]) {
    for (name, value) in vars {
        jail.set_env(name, value);
    }
}

/// Converts any error implementing [`ToString`] into a [`figment::Error`].
///
/// Helpful when bridging between library errors and the jail closure, which
/// must return a figment error.
#[expect(
    clippy::needless_pass_by_value,
    reason = "callers often own the error and passing by value avoids extra clones"
)]
pub fn figment_error<E: ToString>(err: E) -> figment::Error {
    figment::Error::from(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::{figment_error, set_env, with_jail};

    #[test]
    fn returns_closure_output() -> anyhow::Result<()> {
        let value = with_jail(|_| Ok(42))?;
        assert_eq!(value, 42);
        Ok(())
    }

    #[test]
    fn variables_are_visible_inside_the_jail() -> anyhow::Result<()> {
        let seen = with_jail(|jail| {
            set_env(jail, &[("TEST_HELPERS_PROBE", "inside")]);
            std::env::var("TEST_HELPERS_PROBE").map_err(figment_error)
        })?;
        assert_eq!(seen, "inside");
        Ok(())
    }

    #[test]
    fn closure_errors_propagate() {
        let outcome = with_jail::<_, ()>(|_| Err(figment_error("boom")));
        assert!(outcome.is_err_and(|err| err.to_string().contains("boom")));
    }
}
