// Rebuilds the database from scratch and seeds it with a demo board.

use dotenv::dotenv;
use std::env;

use fabricio_board::db;

#[tokio::main]
async fn main() -> Result<(), sqlx::Error> {
    dotenv().ok();
    env_logger::init();

    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://board.db".to_string());
    let pool = db::create_pool(&database_url).await?;

    // Drop in reverse dependency order so the foreign keys never object
    for table in [
        "task_tags",
        "tasks",
        "tags",
        "users",
        "projects",
        "admin_sessions",
    ] {
        sqlx::query(&format!("DROP TABLE IF EXISTS {}", table))
            .execute(&pool)
            .await?;
    }
    db::init_schema(&pool).await?;
    println!("Tables created");

    let project_id = sqlx::query("INSERT INTO projects (code, name) VALUES (?, ?)")
        .bind("FAB-01")
        .bind("My First Kanban Project")
        .execute(&pool)
        .await?
        .last_insert_rowid();

    let fabricio_id = sqlx::query("INSERT INTO users (username, full_name) VALUES (?, ?)")
        .bind("fabricio")
        .bind("Fabricio Aldunate")
        .execute(&pool)
        .await?
        .last_insert_rowid();
    let viernes_id = sqlx::query("INSERT INTO users (username, full_name) VALUES (?, ?)")
        .bind("viernes")
        .bind("Viernes AI")
        .execute(&pool)
        .await?
        .last_insert_rowid();

    sqlx::query("INSERT INTO tags (name, color) VALUES (?, ?)")
        .bind("bug")
        .bind("#d73a4a")
        .execute(&pool)
        .await?;
    let feature_tag_id = sqlx::query("INSERT INTO tags (name, color) VALUES (?, ?)")
        .bind("feature")
        .bind("#0366d6")
        .execute(&pool)
        .await?
        .last_insert_rowid();

    let tasks: [(Option<i64>, &str, &str, &str, i64); 4] = [
        (
            Some(fabricio_id),
            "Set up the development environment",
            "Install the toolchain and create the repo.",
            "To Do",
            0,
        ),
        (
            Some(viernes_id),
            "Design the database schema",
            "Define tables, columns and relations.",
            "In Progress",
            0,
        ),
        (
            None,
            "Build the task API",
            "Endpoint returning the whole board.",
            "In Progress",
            1,
        ),
        (Some(fabricio_id), "Implement the board view", "", "Done", 0),
    ];

    let mut task_ids = Vec::new();
    for (assigned_user_id, title, description, column, position) in tasks {
        let task_id = sqlx::query(
            "INSERT INTO tasks (project_id, assigned_user_id, title, description, \"column\", position)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(project_id)
        .bind(assigned_user_id)
        .bind(title)
        .bind(description)
        .bind(column)
        .bind(position)
        .execute(&pool)
        .await?
        .last_insert_rowid();
        task_ids.push(task_id);
    }

    for task_id in [task_ids[1], task_ids[2]] {
        sqlx::query("INSERT INTO task_tags (task_id, tag_id) VALUES (?, ?)")
            .bind(task_id)
            .bind(feature_tag_id)
            .execute(&pool)
            .await?;
    }

    println!("Database '{}' initialized with sample data", database_url);
    Ok(())
}
