mod controller_properties;
