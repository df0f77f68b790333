use std::net::SocketAddr;

use actix_web::{App, http::StatusCode, test, web::Data};
use serde_json::{Value, json};
use sqlx::SqlitePool;

use leave_board::config::Config;
use leave_board::db::init_db;
use leave_board::routes;
use leave_board::utils::seed::seed_default_employees;

// Governor keys requests by peer address, test requests have none by default.
fn peer() -> SocketAddr {
    "127.0.0.1:12345".parse().unwrap()
}

fn get(uri: &str) -> test::TestRequest {
    test::TestRequest::get().uri(uri).peer_addr(peer())
}

fn post(uri: &str, body: Value) -> test::TestRequest {
    test::TestRequest::post().uri(uri).peer_addr(peer()).set_json(body)
}

fn put(uri: &str, body: Value) -> test::TestRequest {
    test::TestRequest::put().uri(uri).peer_addr(peer()).set_json(body)
}

fn delete(uri: &str) -> test::TestRequest {
    test::TestRequest::delete().uri(uri).peer_addr(peer())
}

async fn seeded_pool() -> SqlitePool {
    let pool = init_db("sqlite::memory:", 1).await.unwrap();
    seed_default_employees(&pool).await.unwrap();
    pool
}

fn lenient_config() -> Config {
    Config {
        enforce_roster_rules: false,
        seed_default_employees: false,
        ..Config::default()
    }
}

fn strict_config() -> Config {
    Config {
        enforce_roster_rules: true,
        seed_default_employees: false,
        ..Config::default()
    }
}

macro_rules! app {
    ($pool:expr, $config:expr) => {{
        let config: Config = $config;
        let api_prefix = config.api_prefix.clone();
        test::init_service(
            App::new()
                .app_data(Data::new($pool.clone()))
                .app_data(Data::new(config))
                .configure(move |cfg| {
                    let limiter = routes::build_limiter(10_000).unwrap();
                    routes::configure(cfg, &api_prefix, &limiter)
                }),
        )
        .await
    }};
}

macro_rules! call_json {
    ($app:expr, $req:expr) => {{
        let resp = test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }};
}

fn leave(employee_id: &str, date: &str) -> Value {
    json!({ "employee_id": employee_id, "date": date })
}

mod health {
    use super::*;

    #[actix_web::test]
    async fn ping_answers_pong() {
        let pool = seeded_pool().await;
        let app = app!(pool, lenient_config());

        let (status, body) = call_json!(app, get("/api/ping"));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "pong": true }));
    }

    #[actix_web::test]
    async fn root_reports_status() {
        let pool = seeded_pool().await;
        let app = app!(pool, lenient_config());

        let (status, body) = call_json!(app, get("/"));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }
}

mod employees {
    use super::*;

    #[actix_web::test]
    async fn lists_the_seeded_roster() {
        let pool = seeded_pool().await;
        let app = app!(pool, lenient_config());

        let (status, body) = call_json!(app, get("/api/employees"));
        assert_eq!(status, StatusCode::OK);

        let roster = body.as_array().unwrap();
        assert_eq!(roster.len(), 12);
        assert!(roster.iter().any(|e| e["id"] == "ayca_cisem" && e["position"] == "TL"));
        assert!(roster.iter().all(|e| e["work_type"] == "Office"));
    }

    #[actix_web::test]
    async fn create_picks_palette_color_from_roster_size() {
        let pool = seeded_pool().await;
        let app = app!(pool, lenient_config());

        let (status, body) = call_json!(
            app,
            post("/api/employees", json!({ "name": "DENIZ KAYA", "short_name": "DENIZ K." }))
        );
        assert_eq!(status, StatusCode::OK);
        // 12 existing employees -> palette index 12
        assert_eq!(body["color"], "#3F51B5");
        assert_eq!(body["position"], "Agent");
        assert_eq!(body["work_type"], "Office");
        assert!(!body["id"].as_str().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn create_keeps_explicit_color_and_work_type() {
        let pool = seeded_pool().await;
        let app = app!(pool, lenient_config());

        let (status, body) = call_json!(
            app,
            post(
                "/api/employees",
                json!({
                    "name": "DENIZ KAYA",
                    "short_name": "DENIZ K.",
                    "work_type": "HomeOffice",
                    "color": "#123456"
                })
            )
        );
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["color"], "#123456");
        assert_eq!(body["work_type"], "HomeOffice");
    }

    #[actix_web::test]
    async fn create_rejects_blank_name() {
        let pool = seeded_pool().await;
        let app = app!(pool, lenient_config());

        let (status, body) = call_json!(
            app,
            post("/api/employees", json!({ "name": "  ", "short_name": "X" }))
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "name must not be empty");
    }

    #[actix_web::test]
    async fn update_changes_only_given_fields() {
        let pool = seeded_pool().await;
        let app = app!(pool, lenient_config());

        let (status, body) = call_json!(
            app,
            put("/api/employees/sila", json!({ "work_type": "HomeOffice" }))
        );
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["work_type"], "HomeOffice");
        assert_eq!(body["name"], "SILA USTA");
        assert_eq!(body["color"], "#00BCD4");
    }

    #[actix_web::test]
    async fn update_without_fields_is_rejected() {
        let pool = seeded_pool().await;
        let app = app!(pool, lenient_config());

        let (status, body) = call_json!(app, put("/api/employees/sila", json!({})));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "No fields to update");
    }

    #[actix_web::test]
    async fn update_unknown_employee_is_not_found() {
        let pool = seeded_pool().await;
        let app = app!(pool, lenient_config());

        let (status, body) = call_json!(app, put("/api/employees/ghost", json!({ "name": "X" })));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Employee not found");
    }

    #[actix_web::test]
    async fn delete_is_refused_while_leaves_exist() {
        let pool = seeded_pool().await;
        let app = app!(pool, lenient_config());

        let (status, _) = call_json!(app, post("/api/leaves", leave("sila", "2026-01-06")));
        assert_eq!(status, StatusCode::OK);

        let (status, body) = call_json!(app, delete("/api/employees/sila"));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Employee has leave records. Delete them first.");
    }

    #[actix_web::test]
    async fn delete_removes_employee_without_leaves() {
        let pool = seeded_pool().await;
        let app = app!(pool, lenient_config());

        let (status, body) = call_json!(app, delete("/api/employees/kader"));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Employee deleted");

        let (_, roster) = call_json!(app, get("/api/employees"));
        assert_eq!(roster.as_array().unwrap().len(), 11);

        let (status, _) = call_json!(app, delete("/api/employees/kader"));
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

mod leaves {
    use super::*;

    #[actix_web::test]
    async fn first_leave_takes_lane_zero_and_monday_week_start() {
        let pool = seeded_pool().await;
        let app = app!(pool, lenient_config());

        let (status, body) = call_json!(app, post("/api/leaves", leave("sila", "2026-01-07")));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["slot"], 0);
        assert_eq!(body["week_start"], "2026-01-05");
        assert_eq!(body["employee_id"], "sila");

        let (status, body) = call_json!(app, post("/api/leaves", leave("elif", "2026-01-07")));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["slot"], 1);
    }

    #[actix_web::test]
    async fn explicit_lane_is_honored_and_gaps_are_filled_first() {
        let pool = seeded_pool().await;
        let app = app!(pool, lenient_config());

        let (status, body) = call_json!(
            app,
            post(
                "/api/leaves",
                json!({ "employee_id": "sila", "date": "2026-01-07", "slot": 3 })
            )
        );
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["slot"], 3);

        let (_, body) = call_json!(app, post("/api/leaves", leave("elif", "2026-01-07")));
        assert_eq!(body["slot"], 0);
    }

    #[actix_web::test]
    async fn occupied_lane_is_rejected() {
        let pool = seeded_pool().await;
        let app = app!(pool, lenient_config());

        let body = json!({ "employee_id": "sila", "date": "2026-01-07", "slot": 2 });
        call_json!(app, post("/api/leaves", body));

        let (status, body) = call_json!(
            app,
            post(
                "/api/leaves",
                json!({ "employee_id": "elif", "date": "2026-01-07", "slot": 2 })
            )
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["detail"],
            "No leave can be added on 2026-01-07: slot 2 is already taken"
        );
    }

    #[actix_web::test]
    async fn employee_cannot_be_off_twice_on_one_day() {
        let pool = seeded_pool().await;
        let app = app!(pool, lenient_config());

        call_json!(app, post("/api/leaves", leave("sila", "2026-01-07")));
        let (status, body) = call_json!(app, post("/api/leaves", leave("sila", "2026-01-07")));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Employee sila is already on leave on 2026-01-07");
    }

    #[actix_web::test]
    async fn eighth_leave_of_a_day_is_rejected() {
        let pool = seeded_pool().await;
        let app = app!(pool, lenient_config());

        for id in ["enis", "onur", "busra", "sila", "nergiz", "aysun", "elif"] {
            let (status, _) = call_json!(app, post("/api/leaves", leave(id, "2026-01-08")));
            assert_eq!(status, StatusCode::OK);
        }

        let (status, body) = call_json!(app, post("/api/leaves", leave("ebru", "2026-01-08")));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["detail"],
            "No leave can be added on 2026-01-08: all 7 slots are taken"
        );
    }

    #[actix_web::test]
    async fn unknown_employee_is_rejected() {
        let pool = seeded_pool().await;
        let app = app!(pool, lenient_config());

        let (status, body) = call_json!(app, post("/api/leaves", leave("ghost", "2026-01-07")));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Unknown employee id ghost");
    }

    #[actix_web::test]
    async fn week_start_must_be_the_monday_of_the_date() {
        let pool = seeded_pool().await;
        let app = app!(pool, lenient_config());

        let (status, body) = call_json!(
            app,
            post(
                "/api/leaves",
                json!({ "employee_id": "sila", "date": "2026-01-07", "week_start": "2026-01-06" })
            )
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "week_start 2026-01-06 is not the Monday of 2026-01-07");
    }

    #[actix_web::test]
    async fn far_future_date_is_rejected() {
        let pool = seeded_pool().await;
        let app = app!(pool, lenient_config());

        let (status, body) = call_json!(app, post("/api/leaves", leave("sila", "+262142-12-31")));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Year 262142 is outside the supported calendar range");

        let (_, all) = call_json!(app, get("/api/leaves"));
        assert_eq!(all, json!([]));
    }

    #[actix_web::test]
    async fn malformed_payload_answers_with_detail() {
        let pool = seeded_pool().await;
        let app = app!(pool, lenient_config());

        let (status, body) = call_json!(
            app,
            post("/api/leaves", json!({ "employee_id": "sila", "date": "7 Ocak" }))
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].is_string());
    }

    #[actix_web::test]
    async fn list_filters_by_week_start() {
        let pool = seeded_pool().await;
        let app = app!(pool, lenient_config());

        call_json!(app, post("/api/leaves", leave("sila", "2026-01-07")));
        call_json!(app, post("/api/leaves", leave("elif", "2026-01-14")));

        let (_, all) = call_json!(app, get("/api/leaves"));
        assert_eq!(all.as_array().unwrap().len(), 2);

        let (status, week) = call_json!(app, get("/api/leaves?week_start=2026-01-12"));
        assert_eq!(status, StatusCode::OK);
        let week = week.as_array().unwrap();
        assert_eq!(week.len(), 1);
        assert_eq!(week[0]["employee_id"], "elif");
    }

    #[actix_web::test]
    async fn deleting_a_leave_frees_its_lane() {
        let pool = seeded_pool().await;
        let app = app!(pool, lenient_config());

        let (_, created) = call_json!(app, post("/api/leaves", leave("sila", "2026-01-07")));
        let id = created["id"].as_str().unwrap();

        let (status, body) = call_json!(app, delete(&format!("/api/leaves/{id}")));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Leave deleted");

        let (status, body) = call_json!(app, delete(&format!("/api/leaves/{id}")));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Leave record not found");

        let (_, again) = call_json!(app, post("/api/leaves", leave("elif", "2026-01-07")));
        assert_eq!(again["slot"], 0);
    }
}

mod roster_rules {
    use super::*;

    #[actix_web::test]
    async fn exclusive_pair_cannot_share_a_day() {
        let pool = seeded_pool().await;
        let app = app!(pool, strict_config());

        let (status, _) = call_json!(app, post("/api/leaves", leave("rabia", "2026-01-07")));
        assert_eq!(status, StatusCode::OK);

        let (status, body) =
            call_json!(app, post("/api/leaves", leave("ayca_demir", "2026-01-07")));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["detail"],
            "ayca_demir and rabia cannot be on leave on the same day (2026-01-07)"
        );
    }

    #[actix_web::test]
    async fn anchor_on_leave_caps_the_day_at_three() {
        let pool = seeded_pool().await;
        let app = app!(pool, strict_config());

        for id in ["ayca_cisem", "sila", "elif"] {
            let (status, _) = call_json!(app, post("/api/leaves", leave(id, "2026-01-09")));
            assert_eq!(status, StatusCode::OK);
        }

        let (status, body) = call_json!(app, post("/api/leaves", leave("ebru", "2026-01-09")));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Maximum number of leaves (3) reached for 2026-01-09");
    }

    #[actix_web::test]
    async fn lenient_mode_skips_team_rules() {
        let pool = seeded_pool().await;
        let app = app!(pool, lenient_config());

        call_json!(app, post("/api/leaves", leave("rabia", "2026-01-07")));
        let (status, _) = call_json!(app, post("/api/leaves", leave("ayca_demir", "2026-01-07")));
        assert_eq!(status, StatusCode::OK);
    }
}

mod overtime {
    use super::*;

    #[actix_web::test]
    async fn records_and_lists_hours() {
        let pool = seeded_pool().await;
        let app = app!(pool, lenient_config());

        let (status, body) = call_json!(
            app,
            post("/api/overtime", json!({ "employee_id": "busra", "date": "2026-01-07", "hours": 1.5 }))
        );
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["hours"], 1.5);

        let (_, list) = call_json!(app, get("/api/overtime"));
        assert_eq!(list.as_array().unwrap().len(), 1);

        let id = body["id"].as_str().unwrap();
        let (status, _) = call_json!(app, delete(&format!("/api/overtime/{id}")));
        assert_eq!(status, StatusCode::OK);
    }

    #[actix_web::test]
    async fn rejects_non_positive_hours() {
        let pool = seeded_pool().await;
        let app = app!(pool, lenient_config());

        let (status, body) = call_json!(
            app,
            post("/api/overtime", json!({ "employee_id": "busra", "date": "2026-01-07", "hours": 0 }))
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "hours must be a positive number");
    }

    #[actix_web::test]
    async fn rejects_unknown_employee() {
        let pool = seeded_pool().await;
        let app = app!(pool, lenient_config());

        let (status, body) = call_json!(
            app,
            post("/api/overtime", json!({ "employee_id": "ghost", "date": "2026-01-07", "hours": 2 }))
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Unknown employee id ghost");
    }
}

mod leave_types {
    use super::*;

    #[actix_web::test]
    async fn compensatory_leave_requires_hours() {
        let pool = seeded_pool().await;
        let app = app!(pool, lenient_config());

        let (status, body) = call_json!(
            app,
            post(
                "/api/leave-types",
                json!({ "employee_id": "elif", "date": "2026-02-02", "leave_type": "compensatory" })
            )
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Compensatory leave requires hours");
    }

    #[actix_web::test]
    async fn hours_are_dropped_for_other_kinds() {
        let pool = seeded_pool().await;
        let app = app!(pool, lenient_config());

        let (status, body) = call_json!(
            app,
            post(
                "/api/leave-types",
                json!({ "employee_id": "elif", "date": "2026-02-02", "leave_type": "annual", "hours": 4 })
            )
        );
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["leave_type"], "annual");
        assert!(body["hours"].is_null());

        let (_, list) = call_json!(app, get("/api/leave-types"));
        assert_eq!(list.as_array().unwrap().len(), 1);
    }
}

mod calendar {
    use super::*;

    #[actix_web::test]
    async fn year_has_fifty_three_monday_weeks() {
        let pool = seeded_pool().await;
        let app = app!(pool, lenient_config());

        let (status, body) = call_json!(app, get("/api/calendar/weeks?year=2026"));
        assert_eq!(status, StatusCode::OK);

        let weeks = body.as_array().unwrap();
        assert_eq!(weeks.len(), 53);
        assert_eq!(weeks[0]["start"], "2025-12-29");
        assert_eq!(weeks[0]["end"], "2026-01-04");
        assert_eq!(weeks[0]["label"], "29 Aralık - 4 Ocak");
        assert_eq!(weeks[0]["month"], 0);
        assert_eq!(weeks[52]["start"], "2026-12-28");
    }

    #[actix_web::test]
    async fn month_filter_keeps_weeks_touching_the_month() {
        let pool = seeded_pool().await;
        let app = app!(pool, lenient_config());

        let (status, body) = call_json!(app, get("/api/calendar/weeks?year=2026&month=0"));
        assert_eq!(status, StatusCode::OK);

        let starts: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|w| w["start"].as_str().unwrap())
            .collect();
        assert_eq!(
            starts,
            ["2025-12-29", "2026-01-05", "2026-01-12", "2026-01-19", "2026-01-26"]
        );
    }

    #[actix_web::test]
    async fn month_out_of_range_is_rejected() {
        let pool = seeded_pool().await;
        let app = app!(pool, lenient_config());

        let (status, body) = call_json!(app, get("/api/calendar/weeks?year=2026&month=12"));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Month index 12 is out of range (0-11)");
    }

    #[actix_web::test]
    async fn dates_past_the_calendar_range_are_rejected() {
        let pool = seeded_pool().await;
        let app = app!(pool, lenient_config());

        for uri in [
            "/api/calendar/weeks/+262142-12-31/days",
            "/api/schedule/+262142-12-31",
            "/api/meals/+262142-12-31",
        ] {
            let (status, body) = call_json!(app, get(uri));
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body["detail"], "Year 262142 is outside the supported calendar range");
        }
    }

    #[actix_web::test]
    async fn days_of_week_start_on_monday() {
        let pool = seeded_pool().await;
        let app = app!(pool, lenient_config());

        let (status, body) = call_json!(app, get("/api/calendar/weeks/2026-01-07/days"));
        assert_eq!(status, StatusCode::OK);

        let days = body.as_array().unwrap();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0]["name"], "Pazartesi");
        assert_eq!(days[0]["date"], "2026-01-05");
        assert_eq!(days[0]["dayOfMonth"], 5);
        assert_eq!(days[0]["month"], 1);
        assert_eq!(days[6]["date"], "2026-01-11");
    }
}

mod schedule {
    use super::*;

    #[actix_web::test]
    async fn week_board_shows_occupants_and_candidates() {
        let pool = seeded_pool().await;
        let app = app!(pool, lenient_config());

        call_json!(app, post("/api/leaves", leave("sila", "2026-01-06")));

        let (status, body) = call_json!(app, get("/api/schedule/2026-01-05"));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["week"]["start"], "2026-01-05");

        let tuesday = &body["days"][1];
        assert_eq!(tuesday["day"]["date"], "2026-01-06");
        assert_eq!(tuesday["slots"].as_array().unwrap().len(), 7);
        assert_eq!(tuesday["slots"][0]["occupant"]["id"], "sila");
        assert!(tuesday["slots"][1]["occupant"].is_null());
        assert_eq!(tuesday["available"].as_array().unwrap().len(), 11);
        assert_eq!(tuesday["full"], false);
    }

    #[actix_web::test]
    async fn preview_normalizes_posted_collections() {
        let pool = seeded_pool().await;
        let app = app!(pool, lenient_config());

        let (status, body) = call_json!(
            app,
            post(
                "/api/schedule/preview",
                json!({ "employees": "not a list", "leaves": null, "week_start": "2026-01-05" })
            )
        );
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["meals"]["weekly_total"], 0);
        assert_eq!(body["board"]["days"][0]["available"], json!([]));
    }

    #[actix_web::test]
    async fn preview_rejects_week_start_past_the_calendar_range() {
        let pool = seeded_pool().await;
        let app = app!(pool, lenient_config());

        let (status, body) = call_json!(
            app,
            post(
                "/api/schedule/preview",
                json!({ "employees": [], "leaves": [], "week_start": "+262142-12-31" })
            )
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].as_str().unwrap().contains("262142"));
    }
}

mod meals {
    use super::*;

    #[actix_web::test]
    async fn office_employee_on_leave_is_not_counted() {
        let pool = seeded_pool().await;
        let app = app!(pool, lenient_config());

        let (status, body) = call_json!(
            app,
            post(
                "/api/schedule/preview",
                json!({
                    "employees": [
                        { "id": 1, "name": "A", "short_name": "A", "color": "#000", "work_type": "Office" },
                        { "id": 2, "name": "B", "short_name": "B", "color": "#000", "work_type": "HomeOffice" }
                    ],
                    "leaves": [
                        { "id": "10", "employee_id": 1, "date": "2026-01-05", "week_start": "2026-01-05", "slot": 0 }
                    ],
                    "week_start": "2026-01-05"
                })
            )
        );
        assert_eq!(status, StatusCode::OK);

        let meals = &body["meals"];
        assert_eq!(meals["days"][0]["meal_count"], 0);
        assert_eq!(meals["days"][1]["meal_count"], 1);
        assert_eq!(meals["weekly_total"], 6);
        assert_eq!(meals["office_count"], 1);
        assert_eq!(meals["home_office_count"], 1);
    }

    #[actix_web::test]
    async fn week_meals_follow_stored_leaves() {
        let pool = seeded_pool().await;
        let app = app!(pool, lenient_config());

        call_json!(app, post("/api/leaves", leave("sila", "2026-01-06")));
        call_json!(app, put("/api/employees/elif", json!({ "work_type": "HomeOffice" })));

        let (status, body) = call_json!(app, get("/api/meals/2026-01-06"));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["office_count"], 11);
        assert_eq!(body["home_office_count"], 1);
        assert_eq!(body["days"][0]["meal_count"], 11);
        assert_eq!(body["days"][1]["meal_count"], 10);
        assert_eq!(body["days"][1]["absent"][0]["id"], "sila");
    }

    #[actix_web::test]
    async fn monthly_total_counts_each_date_once() {
        let pool = seeded_pool().await;
        let app = app!(pool, lenient_config());

        call_json!(app, post("/api/leaves", leave("sila", "2026-02-03")));

        let (status, body) = call_json!(app, get("/api/meals?year=2026&month=1"));
        assert_eq!(status, StatusCode::OK);
        // 28 days x 12 office employees, minus one leave
        assert_eq!(body["monthly_total"], 28 * 12 - 1);
        assert_eq!(body["month"], 1);
        assert!(!body["weeks"].as_array().unwrap().is_empty());
    }
}
