//! Demo dataset the memory store seeds at startup.
//!
//! Mirrors the fixture data the admin dashboard was built against: a small
//! course catalog, four enrolled students across six enrollments, seven
//! offline payments, and one checkout-captured payment awaiting
//! normalization.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::modules::catalog::models::Course;
use crate::modules::enrollments::models::Enrollment;
use crate::modules::payments::models::{OnlinePayment, OnlineStatus, Payment, PaymentStatus};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

pub fn courses() -> Vec<Course> {
    vec![
        Course {
            id: "COURSE-101".to_string(),
            title: "Advanced JavaScript".to_string(),
            category: "Development".to_string(),
            description: "Closures, prototypes, async patterns, and the event loop in depth."
                .to_string(),
            instructor: "Sarah Johnson".to_string(),
            duration: "3 months".to_string(),
            start_date: date(2024, 11, 1),
            end_date: date(2025, 2, 1),
            price: Decimal::from(15000),
            max_installments: 3,
            active: true,
        },
        Course {
            id: "COURSE-102".to_string(),
            title: "React Mastery".to_string(),
            category: "Development".to_string(),
            description: "Component architecture, hooks, and state management at scale."
                .to_string(),
            instructor: "Emily Rodriguez".to_string(),
            duration: "4 months".to_string(),
            start_date: date(2024, 11, 15),
            end_date: date(2025, 3, 15),
            price: Decimal::from(20000),
            max_installments: 4,
            active: true,
        },
        Course {
            id: "COURSE-103".to_string(),
            title: "Python for Data Science".to_string(),
            category: "Data Science".to_string(),
            description: "NumPy, pandas, and practical statistics on real datasets.".to_string(),
            instructor: "Dr. Michael Chen".to_string(),
            duration: "3 months".to_string(),
            start_date: date(2024, 11, 10),
            end_date: date(2025, 2, 10),
            price: Decimal::from(18000),
            max_installments: 3,
            active: true,
        },
        Course {
            id: "COURSE-104".to_string(),
            title: "Web Development Bootcamp".to_string(),
            category: "Development".to_string(),
            description: "Full-stack fundamentals from HTML to deployment.".to_string(),
            instructor: "Alex Thompson".to_string(),
            duration: "5 months".to_string(),
            start_date: date(2024, 11, 5),
            end_date: date(2025, 4, 5),
            price: Decimal::from(25000),
            max_installments: 5,
            active: true,
        },
        Course {
            id: "COURSE-105".to_string(),
            title: "Mobile App Development".to_string(),
            category: "Mobile".to_string(),
            description: "Cross-platform apps with React Native and native modules.".to_string(),
            instructor: "Jessica Park".to_string(),
            duration: "4 months".to_string(),
            start_date: date(2024, 11, 20),
            end_date: date(2025, 3, 20),
            price: Decimal::from(22000),
            max_installments: 4,
            active: true,
        },
        Course {
            id: "COURSE-106".to_string(),
            title: "Cloud Computing with AWS".to_string(),
            category: "Cloud".to_string(),
            description: "Core AWS services, infrastructure as code, and CI/CD pipelines."
                .to_string(),
            instructor: "Robert Williams".to_string(),
            duration: "4 months".to_string(),
            start_date: date(2024, 12, 1),
            end_date: date(2025, 4, 1),
            price: Decimal::from(28000),
            max_installments: 4,
            active: false,
        },
    ]
}

pub fn enrollments() -> Vec<Enrollment> {
    let rajesh = (
        "STU-1001",
        "Rajesh Kumar",
        "rajesh.kumar@example.com",
        "9876543210",
    );
    let priya = (
        "STU-1002",
        "Priya Sharma",
        "priya.sharma@example.com",
        "9876543211",
    );
    let amit = (
        "STU-1003",
        "Amit Patel",
        "amit.patel@example.com",
        "9876543212",
    );
    let neha = (
        "STU-1004",
        "Neha Singh",
        "neha.singh@example.com",
        "9876543213",
    );

    let enrollment = |id: &str,
                      student: (&str, &str, &str, &str),
                      course_id: &str,
                      course_name: &str,
                      fees: i64,
                      installments: u32,
                      enrolled: NaiveDate| Enrollment {
        id: id.to_string(),
        student_id: student.0.to_string(),
        student_name: student.1.to_string(),
        student_email: student.2.to_string(),
        student_phone: student.3.to_string(),
        course_id: course_id.to_string(),
        course_name: course_name.to_string(),
        course_fees: Decimal::from(fees),
        selected_installments: installments,
        enrollment_date: enrolled,
    };

    vec![
        enrollment("ENR-1001", rajesh, "COURSE-101", "Advanced JavaScript", 15000, 3, date(2024, 11, 1)),
        enrollment("ENR-1002", rajesh, "COURSE-102", "React Mastery", 20000, 4, date(2024, 11, 5)),
        enrollment("ENR-1003", priya, "COURSE-103", "Python for Data Science", 18000, 3, date(2024, 11, 2)),
        enrollment("ENR-1004", amit, "COURSE-104", "Web Development Bootcamp", 25000, 5, date(2024, 11, 3)),
        enrollment("ENR-1005", amit, "COURSE-105", "Mobile App Development", 22000, 4, date(2024, 11, 4)),
        enrollment("ENR-1006", neha, "COURSE-106", "Cloud Computing with AWS", 28000, 4, date(2024, 11, 6)),
    ]
}

pub fn payments() -> Vec<Payment> {
    let payment = |id: &str,
                   receipt_id: &str,
                   student_id: &str,
                   student_name: &str,
                   enrollment_id: &str,
                   course_id: &str,
                   course_name: &str,
                   amount: i64,
                   paid: NaiveDate,
                   method: &str,
                   notes: &str| Payment {
        id: id.to_string(),
        receipt_id: receipt_id.to_string(),
        student_id: student_id.to_string(),
        student_name: student_name.to_string(),
        enrollment_id: enrollment_id.to_string(),
        course_id: course_id.to_string(),
        course_name: course_name.to_string(),
        amount: Decimal::from(amount),
        payment_date: paid,
        payment_method: method.to_string(),
        status: PaymentStatus::Completed,
        notes: notes.to_string(),
    };

    vec![
        payment("PAY-1001", "REC-001", "STU-1001", "Rajesh Kumar", "ENR-1001", "COURSE-101", "Advanced JavaScript", 5000, date(2024, 11, 10), "Bank Transfer", "First installment paid"),
        payment("PAY-1002", "REC-002", "STU-1001", "Rajesh Kumar", "ENR-1001", "COURSE-101", "Advanced JavaScript", 5000, date(2024, 11, 15), "Credit Card", "Second installment paid"),
        payment("PAY-1003", "REC-003", "STU-1001", "Rajesh Kumar", "ENR-1002", "COURSE-102", "React Mastery", 5000, date(2024, 11, 12), "Bank Transfer", "First installment paid"),
        payment("PAY-1004", "REC-004", "STU-1002", "Priya Sharma", "ENR-1003", "COURSE-103", "Python for Data Science", 6000, date(2024, 11, 11), "UPI", "First installment paid"),
        payment("PAY-1005", "REC-005", "STU-1003", "Amit Patel", "ENR-1004", "COURSE-104", "Web Development Bootcamp", 5000, date(2024, 11, 13), "Bank Transfer", "First installment paid"),
        payment("PAY-1006", "REC-006", "STU-1003", "Amit Patel", "ENR-1004", "COURSE-104", "Web Development Bootcamp", 5000, date(2024, 11, 18), "Credit Card", "Second installment paid"),
        payment("PAY-1007", "REC-007", "STU-1004", "Neha Singh", "ENR-1006", "COURSE-106", "Cloud Computing with AWS", 7000, date(2024, 11, 14), "Bank Transfer", "First installment paid"),
    ]
}

pub fn online_payments() -> Vec<OnlinePayment> {
    vec![OnlinePayment {
        id: "OPAY-1001".to_string(),
        enrollment_id: "ENR-1003".to_string(),
        installment_no: 2,
        amount: Decimal::from(6000),
        paid_at: date(2024, 11, 20),
        method: None,
        txn_ref: "TXN001234".to_string(),
        status: OnlineStatus::Success,
        receipt_id: None,
    }]
}
