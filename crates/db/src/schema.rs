use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

const INDEXES: [&str; 4] = [
    "CREATE INDEX IF NOT EXISTS idx_appointments_start ON appointments(appointment_start)",
    "CREATE INDEX IF NOT EXISTS idx_appointments_technician_id ON appointments(technician_id)",
    "CREATE INDEX IF NOT EXISTS idx_blocked_times_start ON blocked_times(start_time)",
    "CREATE INDEX IF NOT EXISTS idx_blocked_times_technician_id ON blocked_times(technician_id)",
];

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create technicians table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS technicians (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            avatar_url TEXT NULL,
            color VARCHAR(32) NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create appointments table; a missing end means the default service length
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS appointments (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            technician_id UUID NOT NULL REFERENCES technicians(id),
            appointment_start TIMESTAMP NOT NULL,
            appointment_end TIMESTAMP NULL,
            status VARCHAR(32) NOT NULL DEFAULT 'scheduled',
            client_name VARCHAR(255) NOT NULL,
            service_name VARCHAR(255) NOT NULL,
            phone_number VARCHAR(32) NULL,
            order_number VARCHAR(64) NULL,
            is_favorite BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_appointment_status CHECK (
                status IN ('scheduled', 'pending', 'completed', 'cancelled', 'no-show')
            )
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create blocked_times table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS blocked_times (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            technician_id UUID NOT NULL REFERENCES technicians(id),
            start_time TIMESTAMP NOT NULL,
            end_time TIMESTAMP NOT NULL,
            reason TEXT NULL,
            is_recurring BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    for statement in INDEXES {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
