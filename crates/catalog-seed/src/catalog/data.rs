//! The hardcoded driving-school catalog.

use uuid::Uuid;

use super::{Course, Package, PackageCourse};

pub const SCOOTER: Uuid = Uuid::from_u128(0xa1111111_1111_1111_1111_111111111111);
pub const MOTORBIKE: Uuid = Uuid::from_u128(0xa2222222_2222_2222_2222_222222222222);
pub const CAR: Uuid = Uuid::from_u128(0xa3333333_3333_3333_3333_333333333333);
pub const HEAVY_VEHICLE: Uuid = Uuid::from_u128(0xa4444444_4444_4444_4444_444444444444);

const fn course(
    id: Uuid,
    name: &'static str,
    code: &'static str,
    description: &'static str,
    duration: i32,
    fee: i64,
) -> Course {
    Course {
        id,
        name,
        code,
        description,
        duration,
        fee,
        is_active: true,
    }
}

const fn package(
    id: u128,
    name: &'static str,
    code: &'static str,
    description: &'static str,
    duration: i32,
    price: i64,
    discount_percentage: i32,
) -> Package {
    Package {
        id: Uuid::from_u128(id),
        name,
        code,
        description,
        duration,
        price,
        discount_percentage,
        is_active: true,
    }
}

const fn link(package_id: u128, course_id: Uuid) -> PackageCourse {
    PackageCourse {
        package_id: Uuid::from_u128(package_id),
        course_id,
    }
}

pub static COURSES: [Course; 4] = [
    course(SCOOTER, "Scooter", "SCT", "Learn to ride a scooter safely and confidently", 30, 6500),
    course(MOTORBIKE, "Motorbike", "MTB", "Comprehensive motorbike riding training", 30, 7500),
    course(CAR, "Car", "CAR", "Complete car driving course with road test preparation", 45, 15000),
    course(
        HEAVY_VEHICLE,
        "Heavy Vehicle",
        "HVY",
        "Heavy vehicle and truck driving license preparation",
        60,
        25000,
    ),
];

pub static PACKAGES: [Package; 20] = [
    // Scooter
    package(0xb1111111_1111_1111_1111_111111111111, "Scooter - Half Hour", "SCT-30MIN", "Half hour scooter practice session", 0, 400, 0),
    package(0xb1111111_1111_1111_1111_111111111112, "Scooter - 1 Hour", "SCT-1HR", "One hour scooter practice session", 0, 700, 0),
    package(0xb1111111_1111_1111_1111_111111111113, "Scooter - Daily", "SCT-DAY", "One day scooter practice (2 hours)", 1, 1200, 0),
    package(0xb1111111_1111_1111_1111_111111111114, "Scooter - Weekly", "SCT-WEEK", "One week scooter practice (6 working days)", 7, 3500, 10),
    package(0xb1111111_1111_1111_1111_111111111115, "Scooter - Monthly", "SCT-MONTH", "26 working days complete scooter course", 26, 6500, 15),
    // Motorbike
    package(0xb2222222_2222_2222_2222_222222222221, "Motorbike - Half Hour", "MTB-30MIN", "Half hour motorbike practice session", 0, 450, 0),
    package(0xb2222222_2222_2222_2222_222222222222, "Motorbike - 1 Hour", "MTB-1HR", "One hour motorbike practice session", 0, 800, 0),
    package(0xb2222222_2222_2222_2222_222222222223, "Motorbike - Daily", "MTB-DAY", "One day motorbike practice (2 hours)", 1, 1400, 0),
    package(0xb2222222_2222_2222_2222_222222222224, "Motorbike - Weekly", "MTB-WEEK", "One week motorbike practice (6 working days)", 7, 4000, 10),
    package(0xb2222222_2222_2222_2222_222222222225, "Motorbike - Monthly", "MTB-MONTH", "26 working days complete motorbike course", 26, 7500, 15),
    // Car
    package(0xb3333333_3333_3333_3333_333333333331, "Car - Half Hour", "CAR-30MIN", "Half hour car driving practice", 0, 600, 0),
    package(0xb3333333_3333_3333_3333_333333333332, "Car - 1 Hour", "CAR-1HR", "One hour car driving practice", 0, 1100, 0),
    package(0xb3333333_3333_3333_3333_333333333333, "Car - Daily", "CAR-DAY", "One day car driving practice (2 hours)", 1, 2000, 0),
    package(0xb3333333_3333_3333_3333_333333333334, "Car - Weekly", "CAR-WEEK", "One week car driving practice (6 working days)", 7, 6000, 10),
    package(0xb3333333_3333_3333_3333_333333333335, "Car - Monthly Basic", "CAR-MONTH-B", "26 working days basic car course", 26, 12000, 15),
    package(0xb3333333_3333_3333_3333_333333333336, "Car - Monthly Complete", "CAR-MONTH-C", "45 days complete car course with test prep", 45, 15000, 20),
    // Heavy vehicle
    package(0xb4444444_4444_4444_4444_444444444441, "Heavy Vehicle - Daily", "HVY-DAY", "One day heavy vehicle practice", 1, 2500, 0),
    package(0xb4444444_4444_4444_4444_444444444442, "Heavy Vehicle - Weekly", "HVY-WEEK", "One week heavy vehicle practice", 7, 8000, 10),
    package(0xb4444444_4444_4444_4444_444444444443, "Heavy Vehicle - Monthly", "HVY-MONTH", "30 days heavy vehicle course", 30, 18000, 15),
    package(0xb4444444_4444_4444_4444_444444444444, "Heavy Vehicle - Complete", "HVY-FULL", "60 days complete heavy vehicle license course", 60, 25000, 20),
];

pub static PACKAGE_COURSES: [PackageCourse; 20] = [
    link(0xb1111111_1111_1111_1111_111111111111, SCOOTER),
    link(0xb1111111_1111_1111_1111_111111111112, SCOOTER),
    link(0xb1111111_1111_1111_1111_111111111113, SCOOTER),
    link(0xb1111111_1111_1111_1111_111111111114, SCOOTER),
    link(0xb1111111_1111_1111_1111_111111111115, SCOOTER),
    link(0xb2222222_2222_2222_2222_222222222221, MOTORBIKE),
    link(0xb2222222_2222_2222_2222_222222222222, MOTORBIKE),
    link(0xb2222222_2222_2222_2222_222222222223, MOTORBIKE),
    link(0xb2222222_2222_2222_2222_222222222224, MOTORBIKE),
    link(0xb2222222_2222_2222_2222_222222222225, MOTORBIKE),
    link(0xb3333333_3333_3333_3333_333333333331, CAR),
    link(0xb3333333_3333_3333_3333_333333333332, CAR),
    link(0xb3333333_3333_3333_3333_333333333333, CAR),
    link(0xb3333333_3333_3333_3333_333333333334, CAR),
    link(0xb3333333_3333_3333_3333_333333333335, CAR),
    link(0xb3333333_3333_3333_3333_333333333336, CAR),
    link(0xb4444444_4444_4444_4444_444444444441, HEAVY_VEHICLE),
    link(0xb4444444_4444_4444_4444_444444444442, HEAVY_VEHICLE),
    link(0xb4444444_4444_4444_4444_444444444443, HEAVY_VEHICLE),
    link(0xb4444444_4444_4444_4444_444444444444, HEAVY_VEHICLE),
];
