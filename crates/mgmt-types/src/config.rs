use clap::Args;
use url::Url;

#[derive(Debug, Clone, Args)]
pub struct ServicesConfig {
    #[arg(
        long,
        env = "MGMT_AUTH_URL",
        default_value = "http://localhost:9004",
        help = "Base URL of the authentication service, used to hash passwords"
    )]
    pub auth_url: Url,

    #[arg(
        long,
        env = "MGMT_DATASTORE_WRITER_URL",
        default_value = "http://localhost:9011",
        help = "Base URL of the datastore writer service"
    )]
    pub datastore_writer_url: Url,
}
