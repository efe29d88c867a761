//! Redis-backed Queue Source
//!
//! Producers `RPUSH` serialized records onto a list; this source pops them with `LPOP`,
//! which removes the item atomically.

use super::{QueueError, QueueSource};

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, ConnectionAddr, ConnectionInfo, RedisConnectionInfo};

/// Connection parameters for the Redis server holding the queue.
#[derive(Clone)]
pub struct RedisSettings {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl std::fmt::Debug for RedisSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl RedisSettings {
    fn connection_info(&self) -> ConnectionInfo {
        ConnectionInfo {
            addr: ConnectionAddr::Tcp(self.host.clone(), self.port),
            redis: RedisConnectionInfo {
                username: self.username.clone(),
                password: self.password.clone(),
                ..Default::default()
            },
        }
    }
}

pub struct RedisQueue {
    conn: MultiplexedConnection,
}

impl RedisQueue {
    /// Opens a multiplexed connection and checks it with `PING`.
    pub async fn connect(settings: &RedisSettings) -> Result<Self, QueueError> {
        let client = redis::Client::open(settings.connection_info()).map_err(connect_error)?;
        let mut conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(connect_error)?;

        let _: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(connect_error)?;

        tracing::info!("Connected to Redis at {}:{}", settings.host, settings.port);

        Ok(Self { conn })
    }
}

fn connect_error(err: redis::RedisError) -> QueueError {
    QueueError::Connect {
        source: Box::new(err),
    }
}

#[async_trait]
impl QueueSource for RedisQueue {
    async fn pop_oldest(&self, queue: &str) -> Result<Option<String>, QueueError> {
        // Multiplexed connections are cheap handles onto the same socket.
        let mut conn = self.conn.clone();

        conn.lpop(queue, None)
            .await
            .map_err(|err| QueueError::Pop {
                queue: queue.to_string(),
                source: Box::new(err),
            })
    }
}
