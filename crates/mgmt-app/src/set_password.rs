use mgmt_client::{AuthClient, Context, DatastoreWriterClient};
use mgmt_types::Fqid;
use tracing::{debug, info, instrument, warn};

pub type ClientResult<T> = mgmt_client::Result<T>;

#[allow(async_fn_in_trait)]
pub trait PasswordHasher {
    async fn hash_password(&self, ctx: &Context, plaintext: &str) -> ClientResult<String>;
}

#[allow(async_fn_in_trait)]
pub trait PasswordWriter {
    async fn write_password(&self, ctx: &Context, user_id: u64, hash: &str) -> ClientResult<()>;
}

impl PasswordHasher for AuthClient {
    async fn hash_password(&self, ctx: &Context, plaintext: &str) -> ClientResult<String> {
        self.hash(ctx, plaintext).await
    }
}

impl PasswordWriter for DatastoreWriterClient {
    async fn write_password(&self, ctx: &Context, user_id: u64, hash: &str) -> ClientResult<()> {
        self.write_password_field(ctx, user_id, hash).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Hashing,
    Writing,
}

#[derive(Debug, thiserror::Error)]
pub enum SetPasswordError {
    #[error("hash password: {0}")]
    Hash(mgmt_client::Error),
    #[error("set password: {0}")]
    Write(mgmt_client::Error),
}

impl SetPasswordError {
    pub fn step(&self) -> Step {
        match self {
            SetPasswordError::Hash(_) => Step::Hashing,
            SetPasswordError::Write(_) => Step::Writing,
        }
    }

    pub fn client_error(&self) -> &mgmt_client::Error {
        match self {
            SetPasswordError::Hash(e) | SetPasswordError::Write(e) => e,
        }
    }
}

#[derive(Clone)]
pub struct SetPasswordCommand {
    pub user_id: u64,
    pub password: String,
}

impl std::fmt::Debug for SetPasswordCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SetPasswordCommand")
            .field("user_id", &self.user_id)
            .field("password", &mgmt_types::api::REDACTED)
            .finish()
    }
}

/// Resets user password: hashes plaintext with the hasher and only then writes
/// resulting hash as user's password field. Both steps share deadline of `ctx`.
#[derive(Debug, Clone)]
pub struct SetPassword<H, W> {
    hasher: H,
    writer: W,
}

impl<H, W> SetPassword<H, W>
where
    H: PasswordHasher,
    W: PasswordWriter,
{
    pub fn new(hasher: H, writer: W) -> Self {
        SetPassword { hasher, writer }
    }

    #[instrument(skip_all, fields(user_id = command.user_id))]
    pub async fn execute(
        &self,
        ctx: &Context,
        command: SetPasswordCommand,
    ) -> Result<(), SetPasswordError> {
        let fqid = Fqid::user(command.user_id);

        debug!(step = ?Step::Hashing, "Hashing new password");
        let hash = self
            .hasher
            .hash_password(ctx, &command.password)
            .await
            .map_err(SetPasswordError::Hash)
            .inspect_err(|e| warn!("Failed to reset password of {fqid}: {e}"))?;

        debug!(step = ?Step::Writing, "Writing password hash of {fqid}");
        self.writer
            .write_password(ctx, command.user_id, &hash)
            .await
            .map_err(SetPasswordError::Write)
            .inspect_err(|e| warn!("Failed to reset password of {fqid}: {e}"))?;

        info!("Password changed for {fqid}");
        Ok(())
    }
}
