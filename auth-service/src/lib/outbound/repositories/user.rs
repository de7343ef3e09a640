use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::auth::models::User;
use crate::domain::auth::ports::UserGateway;

pub struct PostgresUserGateway {
    pool: PgPool,
}

impl PostgresUserGateway {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Role ids are fixed in the schema; names are resolved here rather than
/// stored per row.
fn role_name(role_id: i32) -> String {
    match role_id {
        1 => "Administrador",
        2 => "Cliente",
        _ => "Unknown",
    }
    .to_string()
}

#[async_trait]
impl UserGateway for PostgresUserGateway {
    async fn find_active_user(&self, document: &str) -> Result<Option<User>, String> {
        let row = sqlx::query(
            r#"
            SELECT
                u.id,
                u.documento_identificador,
                u.senha_hash,
                c.id AS cliente_id
            FROM usuarios u
            LEFT JOIN clientes c ON u.documento_identificador = c.documento_identificador
            WHERE u.documento_identificador = $1
            AND u.status = 'ativo'
            "#,
        )
        .bind(document)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| e.to_string())?;

        let row = match row {
            Some(row) => row,
            None => return Ok(None),
        };

        let id: Uuid = row.try_get("id").map_err(|e| e.to_string())?;
        let stored_document: String = row
            .try_get("documento_identificador")
            .map_err(|e| e.to_string())?;
        let password_hash: String = row.try_get("senha_hash").map_err(|e| e.to_string())?;
        let tenant_id: Option<Uuid> = row.try_get("cliente_id").map_err(|e| e.to_string())?;

        let role_rows = sqlx::query(
            r#"
            SELECT r.id AS role_id
            FROM usuarios u
            INNER JOIN usuarios_roles ur ON u.id = ur.usuario_id
            INNER JOIN roles r ON ur.role_id = r.id
            WHERE u.documento_identificador = $1
            AND u.status = 'ativo'
            "#,
        )
        .bind(document)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| e.to_string())?;

        let roles = role_rows
            .iter()
            .map(|role_row| role_row.try_get::<i32, _>("role_id").map(role_name))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| e.to_string())?;

        Ok(Some(User {
            id,
            document: stored_document,
            password_hash,
            tenant_id,
            roles,
        }))
    }
}
