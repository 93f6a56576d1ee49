//! # 节气时刻表
//!
//! 1900-2100 年每月“节”（小寒、立春、惊蛰 … 大雪）的交节时刻，
//! 以当月 1 日 00:00 UTC 起算的分钟数表示。
//! 由太阳视黄经（VSOP87 截断级数，含章动与光行差）逐年求得，精确到分钟。

/// 表首年份
pub const FIRST_YEAR: u16 = 1900;
/// 表末年份
pub const LAST_YEAR: u16 = 2100;

#[rustfmt::skip]
const JIE_MINUTES: [[u16; 12]; 201] = [
    [ 6844,  4672,  7222,  6113,  7195,  7479,  9550, 10131, 10277, 11173,  9880,  9416], // 1900
    [ 7193,  5020,  7571,  6465,  7551,  7837,  9908, 10486, 10630, 11527, 10235,  9773], // 1901
    [ 7552,  5378,  7928,  6818,  7899,  8180, 10246, 10822, 10967, 11865, 10578, 10121], // 1902
    [ 7904,  5731,  8279,  7166,  8246,  8527, 10597, 11176, 11322, 12222, 10933, 10475], // 1903
    [ 8257,  6084,  7192,  6079,  7159,  7441,  9512, 10092, 10238, 11136,  9845,  9385], // 1904
    [ 7167,  4996,  7546,  6435,  7514,  7794,  9860, 10437, 10582, 11480, 10190,  9731], // 1905
    [ 7514,  5344,  7896,  6787,  7869,  8149, 10215, 10792, 10936, 11835, 10547, 10089], // 1906
    [ 7872,  5699,  8247,  7135,  8214,  8493, 10559, 11136, 11282, 12183, 10896, 10439], // 1907
    [ 8221,  6047,  7154,  6040,  7119,  7399,  9468, 10047, 10192, 11091,  9802,  9344], // 1908
    [ 7125,  4953,  7501,  6390,  7471,  7754,  9824, 10403, 10547, 11443, 10153,  9695], // 1909
    [ 7478,  5308,  7857,  6743,  7820,  8097, 10161, 10737, 10882, 11781, 10494, 10037], // 1910
    [ 7821,  5650,  8199,  7085,  8161,  8438, 10505, 11084, 11233, 12135, 10847, 10388], // 1911
    [ 8168,  5994,  7101,  5988,  7067,  7348,  9417,  9997, 10146, 11047,  9759,  9299], // 1912
    [ 7078,  4903,  7449,  6336,  7415,  7694,  9759, 10336, 10482, 11384, 10098,  9641], // 1913
    [ 7423,  5249,  7796,  6682,  7760,  8040, 10107, 10685, 10833, 11735, 10451,  9997], // 1914
    [ 7780,  5606,  8148,  7029,  8103,  8380, 10448, 11028, 11177, 12081, 10798, 10344], // 1915
    [ 8128,  5954,  7058,  5938,  7010,  7286,  9354,  9935, 10085, 10988,  9702,  9246], // 1916
    [ 7030,  4858,  7405,  6290,  7366,  7643,  9710, 10290, 10439, 11342, 10057,  9601], // 1917
    [ 7384,  5213,  7761,  6645,  7718,  7991, 10052, 10627, 10775, 11680, 10399,  9946], // 1918
    [ 7732,  5559,  8106,  6989,  8062,  8337, 10401, 10978, 11128, 12033, 10752, 10298], // 1919
    [ 8081,  5907,  7011,  5895,  6972,  7251,  9319,  9898, 10047, 10949,  9665,  9210], // 1920
    [ 6994,  4820,  7365,  6249,  7324,  7602,  9667, 10244, 10390, 11291, 10006,  9551], // 1921
    [ 7337,  5167,  7714,  6598,  7673,  7950, 10018, 10597, 10746, 11649, 10365,  9911], // 1922
    [ 7694,  5521,  8065,  6946,  8018,  8294, 10362, 10945, 11097, 12003, 10720, 10265], // 1923
    [ 8046,  5870,  6973,  5853,  6926,  7202,  9269,  9852, 10006, 10912,  9629,  9173], // 1924
    [ 6953,  4777,  7320,  6203,  7278,  7557,  9625, 10207, 10360, 11268,  9986,  9532], // 1925
    [ 7314,  5138,  7680,  6558,  7629,  7902,  9966, 10544, 10696, 11605, 10328,  9879], // 1926
    [ 7665,  5490,  8030,  6906,  7973,  8245, 10310, 10891, 11045, 11955, 10677, 10226], // 1927
    [ 8011,  5837,  6937,  5815,  6884,  7157,  9224,  9808,  9962, 10870,  9590,  9137], // 1928
    [ 6922,  4749,  7292,  6171,  7241,  7511,  9572, 10149, 10300, 11207,  9928,  9476], // 1929
    [ 7263,  5091,  7637,  6518,  7587,  7858,  9920, 10497, 10648, 11558, 10280,  9831], // 1930
    [ 7616,  5441,  7982,  6861,  7930,  8202, 10266, 10845, 10997, 11907, 10630, 10180], // 1931
    [ 7965,  5790,  6890,  5766,  6835,  7108,  9172,  9752,  9903, 10810,  9530,  9078], // 1932
    [ 6863,  4689,  7232,  6111,  7182,  7458,  9525, 10106, 10258, 11164,  9883,  9431], // 1933
    [ 7217,  5044,  7586,  6464,  7531,  7802,  9865, 10444, 10596, 11505, 10227,  9777], // 1934
    [ 7562,  5389,  7930,  6806,  7872,  8142, 10206, 10788, 10944, 11856, 10578, 10125], // 1935
    [ 7907,  5729,  6829,  5707,  6777,  7051,  9118,  9703,  9861, 10773,  9495,  9042], // 1936
    [ 6824,  4646,  7185,  6062,  7131,  7403,  9466, 10045, 10199, 11111,  9835,  9386], // 1937
    [ 7171,  4995,  7534,  6409,  7475,  7747,  9811, 10393, 10548, 11461, 10188,  9742], // 1938
    [ 7528,  5351,  7886,  6757,  7821,  8092, 10158, 10743, 10902, 11817, 10544, 10097], // 1939
    [ 7884,  5708,  6804,  5675,  6736,  7004,  9068,  9652,  9809, 10722,  9447,  8998], // 1940
    [ 6784,  4610,  7150,  6025,  7090,  7359,  9423, 10006, 10164, 11078,  9804,  9356], // 1941
    [ 7142,  4969,  7509,  6384,  7447,  7713,  9772, 10350, 10506, 11422, 10151,  9707], // 1942
    [ 7495,  5320,  7859,  6731,  7794,  8059, 10119, 10698, 10855, 11770, 10499, 10053], // 1943
    [ 7839,  5663,  6761,  5634,  6700,  6971,  9036,  9619,  9776, 10689,  9415,  8968], // 1944
    [ 6755,  4580,  7118,  5992,  7057,  7326,  9387,  9965, 10118, 11029,  9754,  9308], // 1945
    [ 7096,  4924,  7465,  6339,  7402,  7669,  9731, 10312, 10467, 11381, 10107,  9660], // 1946
    [ 7446,  5270,  7808,  6680,  7743,  8011, 10076, 10661, 10821, 11737, 10464, 10016], // 1947
    [ 7800,  5622,  6718,  5590,  6652,  6920,  8984,  9566,  9725, 10640,  9367,  8918], // 1948
    [ 6701,  4523,  7059,  5932,  6997,  7267,  9332,  9915, 10074, 10991,  9720,  9273], // 1949
    [ 7059,  4881,  7415,  6285,  7345,  7611,  9673, 10255, 10414, 11332, 10064,  9622], // 1950
    [ 7410,  5234,  7767,  6633,  7689,  7953, 10014, 10597, 10758, 11676, 10407,  9962], // 1951
    [ 7750,  5573,  6667,  5535,  6594,  6860,  8925,  9511,  9674, 10592,  9322,  8876], // 1952
    [ 6662,  4486,  7023,  5893,  6952,  7216,  9275,  9855, 10013, 10930,  9661,  9217], // 1953
    [ 7005,  4831,  7369,  6239,  7298,  7561,  9619, 10199, 10358, 11277, 10011,  9568], // 1954
    [ 7356,  5178,  7711,  6579,  7638,  7903,  9966, 10550, 10712, 11632, 10365,  9923], // 1955
    [ 7710,  5532,  6625,  5491,  6550,  6816,  8878,  9460,  9619, 10536,  9266,  8822], // 1956
    [ 6611,  4435,  6970,  5839,  6898,  7165,  9228,  9812,  9972, 10890,  9620,  9176], // 1957
    [ 6964,  4789,  7325,  6192,  7249,  7512,  9573, 10157, 10319, 11239,  9972,  9530], // 1958
    [ 7318,  5142,  7677,  6543,  7599,  7860,  9920, 10504, 10668, 11590, 10322,  9877], // 1959
    [ 7663,  5483,  6576,  5444,  6503,  6769,  8833,  9420,  9585, 10509,  9242,  8798], // 1960
    [ 6583,  4402,  6935,  5802,  6861,  7126,  9187,  9768,  9929, 10851,  9586,  9146], // 1961
    [ 6935,  4757,  7290,  6154,  7210,  7471,  9531, 10114, 10275, 11198,  9935,  9497], // 1962
    [ 7287,  5108,  7637,  6499,  7552,  7814,  9878, 10465, 10632, 11556, 10292,  9853], // 1963
    [ 7642,  5465,  6556,  5418,  6471,  6732,  8792,  9376,  9539, 10461,  9195,  8753], // 1964
    [ 6542,  4366,  6901,  5767,  6822,  7082,  9141,  9725,  9888, 10811,  9546,  9105], // 1965
    [ 6894,  4718,  7251,  6117,  7171,  7430,  9487, 10069, 10232, 11157,  9895,  9458], // 1966
    [ 7248,  5071,  7602,  6465,  7518,  7776,  9833, 10415, 10578, 11501, 10237,  9798], // 1967
    [ 7586,  5408,  6498,  5361,  6416,  6679,  8742,  9327,  9491, 10414,  9149,  8708], // 1968
    [ 6497,  4319,  6851,  5715,  6770,  7032,  9092,  9674,  9835, 10757,  9491,  9051], // 1969
    [ 6842,  4666,  7199,  6062,  7114,  7372,  9430, 10014, 10178, 11102,  9838,  9397], // 1970
    [ 7185,  5006,  7535,  6396,  7448,  7709,  9771, 10360, 10530, 11459, 10197,  9756], // 1971
    [ 7542,  5360,  6448,  5309,  6361,  6622,  8683,  9269,  9435, 10362,  9099,  8659], // 1972
    [ 6445,  4264,  6793,  5654,  6707,  6967,  9027,  9613,  9779, 10707,  9447,  9010], // 1973
    [ 6800,  4620,  7147,  6005,  7054,  7312,  9371,  9957, 10125, 11055,  9798,  9365], // 1974
    [ 7158,  4979,  7506,  6362,  7407,  7662,  9719, 10305, 10473, 11402, 10143,  9706], // 1975
    [ 7497,  5320,  6408,  5267,  6315,  6571,  8631,  9218,  9388, 10318,  9059,  8621], // 1976
    [ 6411,  4233,  6764,  5626,  6676,  6932,  8988,  9570,  9736, 10664,  9406,  8971], // 1977
    [ 6763,  4587,  7118,  5979,  7029,  7283,  9337,  9918, 10082, 11011,  9754,  9320], // 1978
    [ 7112,  4932,  7460,  6318,  7367,  7625,  9685, 10271, 10440, 11370, 10113,  9678], // 1979
    [ 7469,  5290,  6377,  5235,  6285,  6544,  8604,  9189,  9353, 10279,  9018,  8581], // 1980
    [ 6373,  4195,  6725,  5585,  6635,  6893,  8952,  9537,  9703, 10629,  9368,  8931], // 1981
    [ 6723,  4545,  7075,  5933,  6980,  7236,  9295,  9882, 10052, 10982,  9724,  9288], // 1982
    [ 7079,  4900,  7427,  6284,  7331,  7586,  9643, 10230, 10400, 11331, 10072,  9634], // 1983
    [ 7421,  5239,  6325,  5182,  6231,  6489,  8549,  9138,  9310, 10242,  8985,  8548], // 1984
    [ 6335,  4152,  6676,  5534,  6583,  6840,  8899,  9484,  9653, 10584,  9329,  8896], // 1985
    [ 6688,  4508,  7032,  5886,  6931,  7184,  9241,  9826,  9995, 10927,  9673,  9241], // 1986
    [ 7033,  4852,  7374,  6224,  7266,  7519,  9579, 10169, 10344, 11280, 10026,  9592], // 1987
    [ 7384,  5203,  6287,  5139,  6182,  6435,  8493,  9080,  9251, 10184,  8929,  8494], // 1988
    [ 6286,  4107,  6634,  5490,  6534,  6785,  8839,  9424,  9594, 10527,  9274,  8841], // 1989
    [ 6633,  4454,  6979,  5833,  6876,  7126,  9180,  9765,  9937, 10874,  9624,  9194], // 1990
    [ 6988,  4808,  7332,  6185,  7227,  7478,  9533, 10117, 10287, 11221,  9968,  9536], // 1991
    [ 7329,  5148,  6232,  5085,  6129,  6382,  8440,  9027,  9198, 10131,  8877,  8444], // 1992
    [ 6236,  4057,  6583,  5437,  6482,  6735,  8792,  9378,  9548, 10480,  9225,  8794], // 1993
    [ 6588,  4411,  6938,  5792,  6834,  7085,  9139,  9724,  9895, 10829,  9575,  9143], // 1994
    [ 6934,  4753,  7276,  6128,  7170,  7422,  9481, 10072, 10249, 11187,  9936,  9502], // 1995
    [ 7291,  5108,  6190,  5042,  6086,  6341,  8400,  8989,  9162, 10099,  8847,  8414], // 1996
    [ 6204,  4022,  6544,  5396,  6440,  6693,  8749,  9336,  9509, 10445,  9194,  8765], // 1997
    [ 6558,  4377,  6897,  5745,  6783,  7034,  9090,  9680,  9856, 10796,  9548,  9122], // 1998
    [ 6917,  4737,  7258,  6105,  7141,  7389,  9445, 10034, 10210, 11148,  9898,  9468], // 1999
    [ 7261,  5080,  6163,  5012,  6050,  6299,  8354,  8943,  9119, 10058,  8808,  8377], // 2000
    [ 6169,  3989,  6513,  5365,  6405,  6654,  8707,  9292,  9466, 10405,  9157,  8729], // 2001
    [ 6524,  4344,  6868,  5718,  6757,  7005,  9056,  9639,  9811, 10749,  9502,  9074], // 2002
    [ 6868,  4686,  7205,  6053,  7091,  7340,  9396,  9984, 10160, 11101,  9853,  9425], // 2003
    [ 7219,  5036,  6116,  4963,  6003,  6254,  8311,  8900,  9073, 10009,  8759,  8329], // 2004
    [ 6123,  3943,  6465,  5314,  6353,  6602,  8657,  9243,  9417, 10353,  9102,  8673], // 2005
    [ 6467,  4287,  6809,  5656,  6691,  6937,  8991,  9581,  9759, 10701,  9455,  9027], // 2006
    [ 6820,  4638,  7158,  6005,  7040,  7287,  9342,  9931, 10109, 11052,  9804,  9374], // 2007
    [ 7165,  4980,  6059,  4906,  5944,  6192,  8247,  8836,  9014,  9957,  8711,  8282], // 2008
    [ 6074,  3890,  6408,  5254,  6291,  6539,  8594,  9181,  9358, 10300,  9056,  8632], // 2009
    [ 6429,  4248,  6766,  5611,  6644,  6889,  8942,  9529,  9705, 10647,  9403,  8978], // 2010
    [ 6775,  4593,  7110,  5952,  6983,  7227,  9282,  9873, 10054, 10999,  9755,  9329], // 2011
    [ 7124,  4942,  6021,  4866,  5900,  6146,  8201,  8791,  8969,  9912,  8666,  8239], // 2012
    [ 6034,  3853,  6375,  5223,  6258,  6503,  8555,  9140,  9316, 10258,  9014,  8589], // 2013
    [ 6384,  4203,  6722,  5567,  6599,  6843,  8895,  9483,  9661, 10608,  9367,  8944], // 2014
    [ 6741,  4559,  7076,  5919,  6953,  7198,  9252,  9841, 10020, 10963,  9719,  9293], // 2015
    [ 7088,  4906,  5984,  4828,  5862,  6109,  8163,  8753,  8931,  9873,  8628,  8201], // 2016
    [ 5996,  3814,  6333,  5177,  6211,  6457,  8511,  9100,  9279, 10222,  8978,  8553], // 2017
    [ 6349,  4169,  6688,  5533,  6565,  6809,  8862,  9451,  9630, 10575,  9332,  8906], // 2018
    [ 6699,  4514,  7030,  5871,  6903,  7146,  9201,  9793,  9977, 10926,  9684,  9258], // 2019
    [ 7050,  4863,  5937,  4778,  5812,  6058,  8114,  8706,  8888,  9835,  8594,  8169], // 2020
    [ 5963,  3779,  6294,  5135,  6167,  6412,  8465,  9054,  9233, 10179,  8939,  8517], // 2021
    [ 6314,  4131,  6644,  5480,  6506,  6746,  8798,  9389,  9572, 10522,  9285,  8866], // 2022
    [ 6665,  4483,  6996,  5833,  6859,  7098,  9151,  9743,  9927, 10876,  9636,  9213], // 2023
    [ 7009,  4827,  5903,  4742,  5770,  6010,  8060,  8649,  8831,  9780,  8540,  8117], // 2024
    [ 5913,  3730,  6247,  5089,  6117,  6357,  8405,  8991,  9172, 10121,  8884,  8464], // 2025
    [ 6263,  4082,  6599,  5440,  6469,  6708,  8757,  9343,  9521, 10469,  9232,  8812], // 2026
    [ 6610,  4426,  6939,  5777,  6805,  7046,  9097,  9687,  9868, 10817,  9578,  9157], // 2027
    [ 6955,  4771,  5845,  4683,  5712,  5956,  8010,  8601,  8782,  9728,  8487,  8065], // 2028
    [ 5862,  3681,  6197,  5038,  6068,  6310,  8362,  8952,  9132, 10078,  8837,  8414], // 2029
    [ 6210,  4028,  6543,  5381,  6406,  6644,  8695,  9287,  9473, 10425,  9188,  8767], // 2030
    [ 6563,  4378,  6891,  5728,  6755,  6996,  9049,  9643,  9830, 10783,  9545,  9123], // 2031
    [ 6916,  4729,  5800,  4637,  5666,  5908,  7961,  8553,  8738,  9690,  8454,  8033], // 2032
    [ 5828,  3641,  6152,  4988,  6014,  6253,  8305,  8896,  9080, 10034,  8801,  8385], // 2033
    [ 6184,  4001,  6512,  5346,  6369,  6606,  8657,  9249,  9434, 10387,  9153,  8737], // 2034
    [ 6536,  4352,  6862,  5694,  6715,  6951,  9001,  9594,  9782, 10737,  9504,  9085], // 2035
    [ 6883,  4700,  5772,  4606,  5629,  5867,  7917,  8509,  8695,  9649,  8414,  7996], // 2036
    [ 5794,  3611,  6126,  4964,  5989,  6227,  8275,  8863,  9045,  9998,  8764,  8347], // 2037
    [ 6147,  3963,  6475,  5309,  6331,  6565,  8612,  9201,  9386, 10341,  9111,  8696], // 2038
    [ 6496,  4313,  6823,  5656,  6678,  6915,  8966,  9558,  9744, 10697,  9463,  9045], // 2039
    [ 6843,  4660,  5731,  4565,  5589,  5828,  7879,  8470,  8654,  9605,  8369,  7950], // 2040
    [ 5748,  3565,  6078,  4912,  5934,  6170,  8218,  8808,  8993,  9947,  8713,  8296], // 2041
    [ 6095,  3913,  6426,  5260,  6283,  6518,  8567,  9159,  9345, 10300,  9067,  8649], // 2042
    [ 6445,  4259,  6768,  5600,  6622,  6858,  8908,  9501,  9690, 10647,  9416,  8997], // 2043
    [ 6792,  4604,  5671,  4503,  5525,  5764,  7816,  8408,  8596,  9553,  8322,  7905], // 2044
    [ 5702,  3516,  6025,  4857,  5879,  6117,  8168,  8759,  8945,  9900,  8669,  8255], // 2045
    [ 6056,  3871,  6378,  5205,  6220,  6452,  8500,  9093,  9283, 10242,  9014,  8601], // 2046
    [ 6402,  4218,  6725,  5553,  6568,  6801,  8850,  9446,  9638, 10597,  9367,  8951], // 2047
    [ 6749,  4564,  5634,  4465,  5484,  5718,  7767,  8359,  8548,  9506,  8277,  7860], // 2048
    [ 5658,  3473,  5983,  4814,  5832,  6063,  8109,  8698,  8885,  9845,  8618,  8206], // 2049
    [ 6008,  3824,  6333,  5163,  6182,  6414,  8461,  9052,  9240, 10200,  8973,  8561], // 2050
    [ 6362,  4176,  6682,  5509,  6527,  6760,  8809,  9401,  9591, 10550,  9322,  8908], // 2051
    [ 6708,  4523,  5589,  4417,  5435,  5669,  7720,  8313,  8502,  9459,  8229,  7815], // 2052
    [ 5616,  3433,  5943,  4774,  5793,  6027,  8077,  8670,  8858,  9816,  8586,  8172], // 2053
    [ 5972,  3788,  6295,  5123,  6138,  6367,  8413,  9007,  9199, 10162,  8936,  8523], // 2054
    [ 6322,  4135,  6641,  5468,  6484,  6716,  8765,  9361,  9555, 10519,  9292,  8878], // 2055
    [ 6675,  4487,  5552,  4380,  5398,  5632,  7682,  8276,  8467,  9429,  8203,  7791], // 2056
    [ 5590,  3402,  5907,  4732,  5746,  5976,  8022,  8614,  8804,  9766,  8542,  8134], // 2057
    [ 5938,  3754,  6260,  5084,  6096,  6324,  8371,  8965,  9158, 10121,  8897,  8487], // 2058
    [ 6289,  4104,  6608,  5432,  6444,  6672,  8719,  9312,  9506, 10470,  9245,  8833], // 2059
    [ 6634,  4448,  5514,  4339,  5353,  5581,  7627,  8219,  8410,  9373,  8149,  7737], // 2060
    [ 5538,  3354,  5861,  4690,  5706,  5936,  7982,  8573,  8762,  9724,  8500,  8090], // 2061
    [ 5892,  3707,  6211,  5035,  6047,  6274,  8318,  8909,  9100, 10064,  8842,  8434], // 2062
    [ 6237,  4051,  6554,  5377,  6388,  6617,  8665,  9260,  9453, 10417,  9192,  8780], // 2063
    [ 6581,  4395,  5459,  4284,  5298,  5530,  7579,  8174,  8366,  9328,  8101,  7689], // 2064
    [ 5489,  3303,  5809,  4634,  5645,  5872,  7916,  8509,  8702,  9666,  8442,  8032], // 2065
    [ 5834,  3649,  6154,  4977,  5988,  6216,  8262,  8857,  9053, 10021,  8799,  8388], // 2066
    [ 6187,  3997,  6498,  5320,  6332,  6561,  8609,  9205,  9402, 10371,  9150,  8740], // 2067
    [ 6539,  4349,  5409,  4229,  5240,  5469,  7517,  8111,  8305,  9273,  8053,  7646], // 2068
    [ 5448,  3261,  5762,  4584,  5594,  5823,  7871,  8466,  8660,  9627,  8407,  8002], // 2069
    [ 5807,  3621,  6122,  4939,  5944,  6168,  8212,  8806,  9003,  9973,  8755,  8350], // 2070
    [ 6156,  3970,  6472,  5290,  6295,  6518,  8562,  9159,  9357, 10328,  9108,  8700], // 2071
    [ 6503,  4317,  5381,  4203,  5213,  5440,  7485,  8079,  8275,  9243,  8023,  7616], // 2072
    [ 5418,  3232,  5736,  4559,  5567,  5790,  7830,  8420,  8613,  9581,  8364,  7960], // 2073
    [ 5766,  3581,  6084,  4905,  5913,  6137,  8181,  8773,  8968,  9937,  8719,  8314], // 2074
    [ 6117,  3930,  6431,  5251,  6259,  6486,  8533,  9128,  9323, 10291,  9071,  8664], // 2075
    [ 6467,  4279,  5340,  4160,  5168,  5394,  7440,  8034,  8228,  9194,  7973,  7565], // 2076
    [ 5368,  3183,  5686,  4508,  5518,  5744,  7790,  8386,  8583,  9550,  8330,  7922], // 2077
    [ 5724,  3537,  6037,  4856,  5861,  6084,  8128,  8724,  8923,  9896,  8679,  8272], // 2078
    [ 6073,  3883,  6381,  5197,  6202,  6426,  8471,  9069,  9270, 10243,  9027,  8620], // 2079
    [ 6419,  4228,  5285,  4102,  5110,  5337,  7385,  7983,  8182,  9154,  7938,  7533], // 2080
    [ 5336,  3146,  5642,  4457,  5460,  5681,  7723,  8317,  8514,  9486,  8272,  7871], // 2081
    [ 5678,  3492,  5990,  4803,  5803,  6022,  8065,  8661,  8862,  9837,  8624,  8221], // 2082
    [ 6026,  3838,  6336,  5150,  6151,  6372,  8415,  9012,  9214, 10189,  8975,  8571], // 2083
    [ 6375,  4186,  5245,  4060,  5063,  5282,  7323,  7916,  8114,  9087,  7873,  7471], // 2084
    [ 5276,  3089,  5590,  4408,  5413,  5634,  7676,  8269,  8467,  9440,  8227,  7827], // 2085
    [ 5633,  3446,  5943,  4757,  5759,  5978,  8020,  8613,  8812,  9787,  8575,  8175], // 2086
    [ 5982,  3795,  6292,  5104,  6104,  6324,  8368,  8964,  9164, 10137,  8923,  8520], // 2087
    [ 6325,  4138,  5197,  4012,  5016,  5240,  7286,  7883,  8084,  9056,  7840,  7436], // 2088
    [ 5241,  3054,  5554,  4370,  5372,  5590,  7631,  8224,  8424,  9398,  8184,  7783], // 2089
    [ 5588,  3402,  5901,  4716,  5716,  5935,  7976,  8572,  8775,  9753,  8542,  8139], // 2090
    [ 5942,  3750,  6246,  5060,  6063,  6285,  8331,  8929,  9133, 10111,  8900,  8498], // 2091
    [ 6300,  4108,  5162,  3974,  4976,  5197,  7241,  7836,  8036,  9011,  7800,  7401], // 2092
    [ 5207,  3018,  5514,  4326,  5326,  5546,  7590,  8187,  8389,  9366,  8155,  7757], // 2093
    [ 5564,  3377,  5871,  4680,  5675,  5892,  7934,  8531,  8736,  9715,  8506,  8108], // 2094
    [ 5915,  3727,  6222,  5031,  6026,  6240,  8281,  8878,  9083, 10062,  8852,  8451], // 2095
    [ 6256,  4066,  5123,  3935,  4935,  5154,  7196,  7793,  7997,  8975,  7766,  7365], // 2096
    [ 5170,  2982,  5478,  4290,  5288,  5503,  7541,  8133,  8333,  9310,  8103,  7707], // 2097
    [ 5516,  3328,  5824,  4633,  5628,  5843,  7882,  8476,  8678,  9657,  8450,  8052], // 2098
    [ 5859,  3669,  6162,  4971,  5969,  6188,  8231,  8830,  9034, 10012,  8802,  8403], // 2099
    [ 6209,  4020,  6514,  5323,  6321,  6538,  8579,  9174,  9375, 10351,  9140,  8740], // 2100
];

/// 某年某月“节”的交节时刻（当月 1 日 00:00 UTC 起算的分钟数）
pub fn jie_minute(year: u16, month: u8) -> Option<u16> {
    let row = JIE_MINUTES.get(usize::from(year.checked_sub(FIRST_YEAR)?))?;
    row.get(usize::from(month.checked_sub(1)?)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day_and_clock(minutes: u16) -> (u16, u16, u16) {
        (minutes / 1440 + 1, minutes % 1440 / 60, minutes % 60)
    }

    #[test]
    fn test_table_bounds() {
        assert!(jie_minute(1899, 12).is_none());
        assert!(jie_minute(2101, 1).is_none());
        assert!(jie_minute(2000, 0).is_none());
        assert!(jie_minute(2000, 13).is_none());
        assert!(jie_minute(FIRST_YEAR, 1).is_some());
        assert!(jie_minute(LAST_YEAR, 12).is_some());
    }

    #[test]
    fn test_known_lichun() {
        // 2024 立春 02-04 08:27 UTC
        assert_eq!(jie_minute(2024, 2).map(day_and_clock), Some((4, 8, 27)));
        // 1990 立春 02-04 02:14 UTC
        assert_eq!(jie_minute(1990, 2).map(day_and_clock), Some((4, 2, 14)));
        // 2000 立春 02-04 12:40 UTC
        assert_eq!(jie_minute(2000, 2).map(day_and_clock), Some((4, 12, 40)));
    }

    #[test]
    fn test_jie_fall_early_in_month() {
        for year in FIRST_YEAR..=LAST_YEAR {
            for month in 1..=12 {
                let (day, _, _) = jie_minute(year, month).map(day_and_clock).unwrap();
                assert!((3..=9).contains(&day), "{}-{} day {}", year, month, day);
            }
        }
    }
}
