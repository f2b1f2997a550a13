//! Catalog records and the builtin dataset.
//!
//! Records are plain `Copy` structs over `&'static str` so the whole catalog
//! lives in static tables. A [`Catalog`] borrows three such tables; the seeder
//! only ever reads through it.

mod data;

use std::collections::HashSet;

use thiserror::Error;
use uuid::Uuid;

pub use data::{CAR, COURSES, HEAVY_VEHICLE, MOTORBIKE, PACKAGE_COURSES, PACKAGES, SCOOTER};

/// A training offering for one vehicle category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Course {
    pub id: Uuid,
    pub name: &'static str,
    /// Unique short code, the conflict key on insert.
    pub code: &'static str,
    pub description: &'static str,
    /// Duration in days.
    pub duration: i32,
    /// Fee in the smallest currency unit.
    pub fee: i64,
    pub is_active: bool,
}

/// A purchasable bundle of practice time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Package {
    pub id: Uuid,
    pub name: &'static str,
    /// Unique short code, the conflict key on insert.
    pub code: &'static str,
    pub description: &'static str,
    /// Duration in days. Zero for sessions shorter than a day.
    pub duration: i32,
    pub price: i64,
    /// Discount in percent, 0-100.
    pub discount_percentage: i32,
    pub is_active: bool,
}

/// Grants a package access to a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackageCourse {
    pub package_id: Uuid,
    pub course_id: Uuid,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate course code: {0}")]
    DuplicateCourseCode(&'static str),
    #[error("Duplicate package code: {0}")]
    DuplicatePackageCode(&'static str),
    #[error("Duplicate package-course link: {package_id} -> {course_id}")]
    DuplicateLink { package_id: Uuid, course_id: Uuid },
    #[error("Link references unknown package {0}")]
    UnknownPackage(Uuid),
    #[error("Link references unknown course {0}")]
    UnknownCourse(Uuid),
    #[error("Package {code} has discount {discount}% outside 0-100")]
    DiscountOutOfRange { code: &'static str, discount: i32 },
}

/// The three datasets loaded by a seed run.
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    pub courses: &'a [Course],
    pub packages: &'a [Package],
    pub links: &'a [PackageCourse],
}

impl Catalog<'static> {
    /// The hardcoded driving-school catalog.
    pub fn builtin() -> Self {
        Self {
            courses: &COURSES,
            packages: &PACKAGES,
            links: &PACKAGE_COURSES,
        }
    }
}

impl<'a> Catalog<'a> {
    pub fn new(
        courses: &'a [Course],
        packages: &'a [Package],
        links: &'a [PackageCourse],
    ) -> Self {
        Self {
            courses,
            packages,
            links,
        }
    }

    /// Checks the catalog is consistent with itself before anything touches
    /// the database. Returns the first problem found.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut course_codes = HashSet::new();
        for course in self.courses {
            if !course_codes.insert(course.code) {
                return Err(CatalogError::DuplicateCourseCode(course.code));
            }
        }

        let mut package_codes = HashSet::new();
        for package in self.packages {
            if !package_codes.insert(package.code) {
                return Err(CatalogError::DuplicatePackageCode(package.code));
            }
            if !(0..=100).contains(&package.discount_percentage) {
                return Err(CatalogError::DiscountOutOfRange {
                    code: package.code,
                    discount: package.discount_percentage,
                });
            }
        }

        let course_ids: HashSet<Uuid> = self.courses.iter().map(|c| c.id).collect();
        let package_ids: HashSet<Uuid> = self.packages.iter().map(|p| p.id).collect();
        let mut pairs = HashSet::new();
        for link in self.links {
            if !package_ids.contains(&link.package_id) {
                return Err(CatalogError::UnknownPackage(link.package_id));
            }
            if !course_ids.contains(&link.course_id) {
                return Err(CatalogError::UnknownCourse(link.course_id));
            }
            if !pairs.insert(*link) {
                return Err(CatalogError::DuplicateLink {
                    package_id: link.package_id,
                    course_id: link.course_id,
                });
            }
        }

        Ok(())
    }

    /// Name of the package with the given id, for log lines.
    pub fn package_name(&self, id: Uuid) -> Option<&'static str> {
        self.packages.iter().find(|p| p.id == id).map(|p| p.name)
    }

    /// Name of the course with the given id, for log lines.
    pub fn course_name(&self, id: Uuid) -> Option<&'static str> {
        self.courses.iter().find(|c| c.id == id).map(|c| c.name)
    }
}
