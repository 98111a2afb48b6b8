use crate::config::SurrealDbConfig;

use surrealdb::{
    Error, Surreal,
    engine::remote::ws::{Client, Ws},
    opt::auth::Root,
};
use tracing::info;

#[tracing::instrument(skip_all, fields(host = %db_config.host, port = db_config.port))]
pub async fn connect(db_config: &SurrealDbConfig) -> Result<Surreal<Client>, Error> {
    let address = format!("{}:{}", db_config.host, db_config.port);
    let db = Surreal::new::<Ws>(address).await?;

    db.signin(Root {
        username: &db_config.username,
        password: &db_config.password,
    })
    .await?;

    db.use_ns(&db_config.namespace)
        .use_db(&db_config.database)
        .await?;

    info!(
        namespace = %db_config.namespace,
        database = %db_config.database,
        "connected to account store"
    );

    Ok(db)
}
