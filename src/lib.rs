pub mod configuration;

pub mod text {
    pub mod formattokenizer;
    pub mod localetable;
    pub mod isoweek;
    pub mod dateformatter;
    pub mod dateparser;
}

pub mod time {
    pub mod utility;
    pub mod rangeofdates;
    pub mod workingdays;
    pub mod holiday;
    pub mod taskadjustment;

    pub mod calendar {
        pub mod workingcalendar;
        pub mod projectcalendar;
    }

    pub mod displayrange {
        pub mod granularity;
        pub mod scheduleditem;
        pub mod boundary;
    }
}
