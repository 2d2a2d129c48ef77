pub mod configuration;

pub mod feed {
    pub mod feederror;
    pub mod holidayclassifier;
    pub mod icalparser;
    pub mod holidaysource;
    pub mod holidayfeedmanager;
}

pub mod manager {
    pub mod managererror;
    pub mod manager;
}

pub mod time {
    pub mod utility;
    pub mod weekday;
    pub mod rangeofdates;
    pub mod workdays;
    pub mod daterangeformatter;

    pub mod calendar {
        pub mod holiday;
        pub mod holidaycalendar;
        pub mod holidaylistcalendar;
    }
}

pub mod workdayrequest;
